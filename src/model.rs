// Core records: scheduled events and the filtering windows.

/// One scheduled occurrence for a single team, as read from `events.txt`.
///
/// The date is kept as the raw `YYYY-MM-DD` string from the file; it is only
/// parsed when filtering, so a bad date surfaces there and not in the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub team_name: String,
    pub date: String,
    pub time: String,
    pub streaming_link: String,
}

impl Event {
    /// Parses one comma-delimited line into an event.
    ///
    /// Only lines with exactly four fields produce an event; every other
    /// field count returns `None`. Fields are kept verbatim, the line is
    /// only trimmed of surrounding whitespace (the trailing newline).
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim().split(',').collect();
        if fields.len() != 4 {
            return None;
        }
        Some(Self {
            team_name: fields[0].to_string(),
            date: fields[1].to_string(),
            time: fields[2].to_string(),
            streaming_link: fields[3].to_string(),
        })
    }

    /// The one-line description shown next to the team logo.
    pub fn summary_line(&self) -> String {
        format!(
            "{} on {} at {} on {}",
            self.team_name, self.date, self.time, self.streaming_link
        )
    }
}

/// Inclusive date range used when filtering events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Events dated exactly today.
    Today,
    /// Events within [today, today + 7 days].
    Week,
    /// Events within [today, today + 30 days].
    Month,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_keeps_fields_verbatim() {
        let event = Event::parse_line("Lakers,2024-01-01,19:00,http://x\n").unwrap();
        assert_eq!(event.team_name, "Lakers");
        assert_eq!(event.date, "2024-01-01");
        assert_eq!(event.time, "19:00");
        assert_eq!(event.streaming_link, "http://x");
    }

    #[test]
    fn test_parse_line_rejects_other_field_counts() {
        assert!(Event::parse_line("Lakers,2024-01-01,19:00").is_none());
        assert!(Event::parse_line("Lakers,2024-01-01,19:00,http://x,extra").is_none());
        assert!(Event::parse_line("").is_none());
    }

    #[test]
    fn test_summary_line_reconstructs_the_row() {
        let event = Event::parse_line("Golden State Warriors,2024-03-05,20:30,http://y").unwrap();
        assert_eq!(
            event.summary_line(),
            "Golden State Warriors on 2024-03-05 at 20:30 on http://y"
        );
    }
}
