// Tests for the flat-file loaders and the favorites store.
use matchday::roster::{load_events, load_favorite_teams, load_teams, update_favorite_teams};
use std::path::PathBuf;

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_event_parsing_preserves_fields_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "events.txt", "Lakers,2024-01-01,19:00,http://x\n");

    let events = load_events(&path).unwrap();
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.team_name, "Lakers");
    assert_eq!(event.date, "2024-01-01");
    assert_eq!(event.time, "19:00");
    assert_eq!(event.streaming_link, "http://x");

    // Round-trip: the summary string reproduces every field of the row.
    assert_eq!(
        event.summary_line(),
        "Lakers on 2024-01-01 at 19:00 on http://x"
    );
}

#[test]
fn test_three_field_line_is_dropped_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "events.txt", "Lakers,2024-01-01,19:00\n");

    let events = load_events(&path).unwrap();
    assert!(events.is_empty(), "short rows must be skipped, not kept");
}

#[test]
fn test_five_field_line_is_dropped_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "events.txt", "Lakers,2024-01-01,19:00,http://x,bonus\n");

    let events = load_events(&path).unwrap();
    assert!(events.is_empty(), "long rows must be skipped, not kept");
}

#[test]
fn test_mixed_file_keeps_only_well_formed_rows_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "events.txt",
        "Lakers,2024-01-01,19:00,http://x\n\
         broken line\n\
         Celtics,2024-01-02,18:00,http://y\n\
         too,many,fields,here,now\n\
         Bulls,2024-01-03,20:00,http://z\n",
    );

    let events = load_events(&path).unwrap();
    let teams: Vec<&str> = events.iter().map(|e| e.team_name.as_str()).collect();
    assert_eq!(teams, vec!["Lakers", "Celtics", "Bulls"]);
}

#[test]
fn test_missing_events_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_events(&dir.path().join("events.txt")).is_err());
}

#[test]
fn test_favorites_write_then_read_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.txt");

    let teams = vec![
        "Lakers".to_string(),
        "Golden State Warriors".to_string(),
        "Celtics".to_string(),
    ];
    update_favorite_teams(&path, &teams).unwrap();

    let read_back = load_favorite_teams(&path).unwrap();
    assert_eq!(read_back, teams, "list and order must survive the trip");
}

#[test]
fn test_rewrite_replaces_previous_contents_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.txt");

    update_favorite_teams(&path, &["Lakers".to_string(), "Celtics".to_string()]).unwrap();
    update_favorite_teams(&path, &["Celtics".to_string()]).unwrap();

    assert_eq!(load_favorite_teams(&path).unwrap(), vec!["Celtics"]);
}

#[test]
fn test_roster_loader_trims_and_skips_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "teams.txt", "Lakers  \n\nCeltics\n   \nBulls\n");

    let teams = load_teams(&path).unwrap();
    assert_eq!(teams, vec!["Lakers", "Celtics", "Bulls"]);
}

#[test]
fn test_missing_favorites_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_favorite_teams(&dir.path().join("favorites.txt")).is_err());
}
