//! Terminal rendering for eventdir types.
//!
//! Extension traits that add colored output to eventdir-core types
//! using owo_colors.

use eventdir_core::EventRecord;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventRecord {
    fn render(&self) -> String {
        let mut line = format!("{} {}", self.display_date(), self.title);
        if !self.location.is_empty() {
            line.push_str(&format!(" {}", format!("@ {}", self.location).dimmed()));
        }
        line
    }
}

/// A heading with its event count, followed by one line per event.
pub fn render_section(heading: &str, records: &[EventRecord]) -> String {
    let title = format!("{} ({} {})", heading, records.len(), pluralize("event", records.len()));
    let mut lines = vec![title.bold().to_string()];

    if records.is_empty() {
        lines.push(format!("  {}", "No events".dimmed()));
    } else {
        lines.extend(records.iter().map(|r| format!("  {}", r.render())));
    }

    lines.join("\n")
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 { word.to_string() } else { format!("{word}s") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_counts() {
        assert_eq!(pluralize("event", 1), "event");
        assert_eq!(pluralize("event", 0), "events");
        assert_eq!(pluralize("event", 3), "events");
    }

    #[test]
    fn empty_section_says_so() {
        let section = render_section("Upcoming", &[]);
        assert!(section.contains("Upcoming (0 events)"));
        assert!(section.contains("No events"));
    }
}
