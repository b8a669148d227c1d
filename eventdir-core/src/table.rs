//! Markdown table rendering for event lists.

use crate::event::EventRecord;

const HEADER: &str = "| Date | Title | Location | Description | Link |\n|------|-------|----------|-------------|------|";
const EMPTY_ROW: &str = "| – | – | – | – | – |";

/// Render `records` as a Markdown table, in the order given.
///
/// An empty list still renders the header and a single placeholder row.
pub fn render_table(records: &[EventRecord]) -> String {
    if records.is_empty() {
        return format!("{HEADER}\n{EMPTY_ROW}");
    }

    let mut lines = vec![HEADER.to_string()];
    lines.extend(records.iter().map(render_row));
    lines.join("\n")
}

fn render_row(record: &EventRecord) -> String {
    format!(
        "| {} | {} | {} | {} | {} |",
        record.display_date(),
        record.title,
        record.location,
        description(&record.summary),
        link_cell(&record.link),
    )
}

fn description(summary: &str) -> String {
    summary.trim().replace('\n', " ")
}

fn link_cell(link: &str) -> String {
    if link.is_empty() {
        String::new()
    } else {
        format!("[link]({link})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::{America, Europe};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn meetup() -> EventRecord {
        EventRecord {
            id: "meetup".to_string(),
            path: PathBuf::from("events/2099-01-01-meetup.yaml"),
            title: "Rust Meetup".to_string(),
            start: Europe::London.with_ymd_and_hms(2099, 1, 1, 10, 0, 0).unwrap(),
            location: "Community Hall".to_string(),
            link: "https://example.com/rsvp".to_string(),
            summary: "  Talks and pizza.\nBring a laptop.\n".to_string(),
        }
    }

    #[test]
    fn empty_table_has_placeholder_row() {
        assert_eq!(
            render_table(&[]),
            "| Date | Title | Location | Description | Link |\n\
             |------|-------|----------|-------------|------|\n\
             | – | – | – | – | – |"
        );
    }

    #[test]
    fn renders_rows_in_order() {
        let mut second = meetup();
        second.title = "Workshop".to_string();
        second.start = America::Los_Angeles.with_ymd_and_hms(2099, 3, 4, 23, 30, 0).unwrap();
        second.location = String::new();
        second.link = String::new();
        second.summary = String::new();

        assert_eq!(
            render_table(&[meetup(), second]),
            "| Date | Title | Location | Description | Link |\n\
             |------|-------|----------|-------------|------|\n\
             | 2099-01-01 | Rust Meetup | Community Hall | Talks and pizza. Bring a laptop. | [link](https://example.com/rsvp) |\n\
             | 2099-03-04 | Workshop |  |  |  |"
        );
    }

    #[test]
    fn date_uses_event_timezone() {
        let mut late = meetup();
        // 23:30 in Los Angeles is already the next day in UTC.
        late.start = America::Los_Angeles.with_ymd_and_hms(2099, 3, 4, 23, 30, 0).unwrap();
        assert!(render_table(&[late]).contains("| 2099-03-04 |"));
    }

    #[test]
    fn interior_newlines_become_single_spaces() {
        assert_eq!(description("\nLine one\nLine two\n\n"), "Line one Line two");
    }
}
