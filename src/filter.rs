// Pure event filtering over favorite teams and date windows.
use crate::model::{Event, Window};
use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};

/// The current local calendar date; callers compute it once per refresh so
/// all three windows agree even across a midnight boundary.
pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Keeps the events whose team is in `favorites` and whose date falls in
/// `window` relative to `today`. Output order matches input order.
///
/// Every event's date is parsed before the favorites check, so a malformed
/// date anywhere in the list is a propagated error rather than a skip. This
/// is deliberately stricter than the loader's silent-skip policy.
pub fn filter_events(
    favorites: &[String],
    events: &[Event],
    window: Window,
    today: NaiveDate,
) -> Result<Vec<Event>> {
    let mut matched = Vec::new();
    for event in events {
        let date = NaiveDate::parse_from_str(&event.date, "%Y-%m-%d").with_context(|| {
            format!(
                "invalid event date {:?} for team {:?}",
                event.date, event.team_name
            )
        })?;
        if !favorites.contains(&event.team_name) {
            continue;
        }
        let keep = match window {
            Window::Today => date == today,
            Window::Week => today <= date && date <= today + Duration::days(7),
            Window::Month => today <= date && date <= today + Duration::days(30),
        };
        if keep {
            matched.push(event.clone());
        }
    }
    Ok(matched)
}
