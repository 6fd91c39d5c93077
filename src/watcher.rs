// Polls the favorites file for external edits and notifies the GUI.
//
// The 1 second cadence is a deliberate simplicity-over-responsiveness
// trade-off; it bounds the latency between an external edit and a UI
// refresh. The probe is a fresh stat on every poll, nothing stays open.
use crate::roster;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tokio::sync::mpsc;

pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Notification emitted whenever the favorites file's mtime changes.
#[derive(Debug, Clone)]
pub enum WatcherEvent {
    /// The file changed and was re-read successfully.
    FavoritesChanged(Vec<String>),
    /// The file changed but could not be re-read.
    ReadFailed(String),
}

/// Tracks the last observed modification time of one file.
pub struct MtimeProbe {
    path: PathBuf,
    last_seen: Option<SystemTime>,
}

impl MtimeProbe {
    /// The construction stat primes the probe, so pre-existing content does
    /// not count as a change on the first poll.
    pub fn new(path: PathBuf) -> Self {
        let last_seen = mtime_of(&path);
        Self { path, last_seen }
    }

    /// Stats the file and reports whether its mtime differs from the last
    /// observation. A file appearing or disappearing counts as a change.
    pub fn check(&mut self) -> bool {
        let current = mtime_of(&self.path);
        let changed = current != self.last_seen;
        self.last_seen = current;
        changed
    }
}

fn mtime_of(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

/// Polling loop: once per second, compare the favorites file's mtime with
/// the previous observation; on a difference, re-read the file and send the
/// fresh list over `tx`. Runs until the receiving side goes away.
pub async fn watch(path: PathBuf, tx: mpsc::Sender<WatcherEvent>) {
    let mut probe = MtimeProbe::new(path.clone());
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    loop {
        ticker.tick().await;
        if !probe.check() {
            continue;
        }
        let event = match roster::load_favorite_teams(&path) {
            Ok(favorites) => {
                log::info!("favorites file changed, now {} teams", favorites.len());
                WatcherEvent::FavoritesChanged(favorites)
            }
            Err(err) => {
                log::warn!("favorites file changed but could not be re-read: {err:#}");
                WatcherEvent::ReadFailed(err.to_string())
            }
        };
        if tx.send(event).await.is_err() {
            break;
        }
    }
}
