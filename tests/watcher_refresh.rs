// Tests for change detection on the favorites file and the reload path
// it drives.
use chrono::NaiveDate;
use matchday::filter::filter_events;
use matchday::model::{Event, Window};
use matchday::roster::{load_favorite_teams, update_favorite_teams};
use matchday::watcher::MtimeProbe;
use std::fs::OpenOptions;
use std::path::Path;
use std::time::{Duration, SystemTime};

// Mtime granularity varies by filesystem, so the tests set explicit
// timestamps instead of sleeping between writes.
fn bump_mtime(path: &Path, offset: Duration) {
    let file = OpenOptions::new().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() + offset).unwrap();
}

#[test]
fn test_probe_is_quiet_while_nothing_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.txt");
    std::fs::write(&path, "Lakers\n").unwrap();

    let mut probe = MtimeProbe::new(path);
    assert!(!probe.check(), "priming observation must not count as a change");
    assert!(!probe.check());
}

#[test]
fn test_probe_detects_mtime_bump_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.txt");
    std::fs::write(&path, "Lakers\n").unwrap();

    let mut probe = MtimeProbe::new(path.clone());
    assert!(!probe.check());

    bump_mtime(&path, Duration::from_secs(5));
    assert!(probe.check(), "a changed mtime must be reported");
    assert!(!probe.check(), "and only reported once");
}

#[test]
fn test_probe_sees_file_creation_as_a_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.txt");

    let mut probe = MtimeProbe::new(path.clone());
    assert!(!probe.check(), "a still-missing file is not a change");

    std::fs::write(&path, "Lakers\n").unwrap();
    assert!(probe.check());
}

#[test]
fn test_toggling_a_team_off_removes_its_events_from_all_views() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.txt");
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let row = |team: &str, date: &str| Event {
        team_name: team.to_string(),
        date: date.to_string(),
        time: "19:00".to_string(),
        streaming_link: "http://x".to_string(),
    };
    let events = vec![
        row("Lakers", "2024-01-01"),
        row("Celtics", "2024-01-01"),
        row("Celtics", "2024-01-06"),
        row("Celtics", "2024-01-20"),
    ];

    update_favorite_teams(&path, &["Lakers".to_string(), "Celtics".to_string()]).unwrap();
    let mut probe = MtimeProbe::new(path.clone());
    let favorites = load_favorite_teams(&path).unwrap();

    let month = filter_events(&favorites, &events, Window::Month, today).unwrap();
    assert_eq!(month.len(), 4);

    // External edit: drop Celtics, as the checkbox toggle would.
    update_favorite_teams(&path, &["Lakers".to_string()]).unwrap();
    bump_mtime(&path, Duration::from_secs(5));
    assert!(probe.check(), "the poll after the rewrite must fire");

    let favorites = load_favorite_teams(&path).unwrap();
    assert_eq!(favorites, vec!["Lakers"]);

    for window in [Window::Today, Window::Week, Window::Month] {
        let matched = filter_events(&favorites, &events, window, today).unwrap();
        assert!(
            matched.iter().all(|e| e.team_name == "Lakers"),
            "no Celtics events may survive in any view"
        );
        assert_eq!(matched.len(), 1);
    }
}
