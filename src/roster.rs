// Flat-file loaders for the team roster, the event schedule, and the
// user's favorite teams, plus the single write path for favorites.
use crate::model::Event;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a newline-delimited list of team names, in file order.
///
/// Trailing whitespace is stripped and blank lines are skipped. A missing
/// file is an error.
pub fn load_favorite_teams(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading favorites file {}", path.display()))?;
    Ok(read_names(&content))
}

/// Reads the full roster from `teams.txt`, same line discipline as favorites.
pub fn load_teams(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading team roster {}", path.display()))?;
    Ok(read_names(&content))
}

fn read_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the comma-delimited event schedule.
///
/// Lines that do not have exactly four fields are dropped silently, not
/// rejected; callers and tests rely on malformed rows being ignored.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading events file {}", path.display()))?;
    Ok(content.lines().filter_map(Event::parse_line).collect())
}

/// Overwrites the favorites file with one team name per line, in the order
/// given. Plain truncating write; there is no atomic-rename step, so a crash
/// mid-write can leave a partial file.
pub fn update_favorite_teams(path: &Path, teams: &[String]) -> Result<()> {
    let mut body = String::new();
    for team in teams {
        body.push_str(team);
        body.push('\n');
    }
    fs::write(path, body).with_context(|| format!("writing favorites file {}", path.display()))
}
