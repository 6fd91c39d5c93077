// Wires the favorites watcher into the GUI as an event stream.
//
// The watcher runs off the presentation thread and hands its results over
// as messages; it never mutates UI state directly.
use crate::config::Config;
use crate::gui::message::Message;
use crate::gui::state::GuiApp;
use crate::paths::AppPaths;
use crate::watcher::{self, WatcherEvent};
use iced::futures::SinkExt;
use iced::futures::channel::mpsc::Sender;
use iced::{Subscription, stream};

pub fn subscription(_app: &GuiApp) -> Subscription<Message> {
    Subscription::run(favorites_stream)
}

// Helper function to satisfy Subscription::run fn pointer requirement;
// the stream resolves the favorites path itself instead of capturing state.
fn favorites_stream() -> impl iced::futures::Stream<Item = Message> {
    stream::channel(16, |mut output: Sender<Message>| async move {
        let config = Config::load().unwrap_or_default();
        let favorites_path = AppPaths::favorites_path(&AppPaths::data_dir(&config));

        let (tx, mut rx) = tokio::sync::mpsc::channel(8);
        tokio::spawn(watcher::watch(favorites_path, tx));

        while let Some(event) = rx.recv().await {
            let message = match event {
                WatcherEvent::FavoritesChanged(favorites) => {
                    Message::FavoritesFileChanged(Ok(favorites))
                }
                WatcherEvent::ReadFailed(err) => Message::FavoritesFileChanged(Err(err)),
            };
            let _ = output.send(message).await;
        }

        std::future::pending::<()>().await;
    })
}
