//! Publishing the events block into the README.
//!
//! The region between `<!-- EVENTS:START -->` and `<!-- EVENTS:END -->`
//! (markers included) is owned by eventdir and regenerated on every run.

use std::path::Path;

use crate::error::{EventDirError, EventDirResult};
use crate::event::EventRecord;
use crate::table::render_table;

pub const MARKER_START: &str = "<!-- EVENTS:START -->";
pub const MARKER_END: &str = "<!-- EVENTS:END -->";

/// Build the full replacement block, markers included.
pub fn render_block(upcoming: &[EventRecord], recent_past: &[EventRecord], window_label: &str) -> String {
    format!(
        "{MARKER_START}\n\n\
         ### Upcoming\n\n{}\n\n\
         ### Recent Past (last {window_label})\n\n{}\n\n\
         {MARKER_END}",
        render_table(upcoming),
        render_table(recent_past),
    )
}

/// Replace every marker region in `content` with `block`.
///
/// Each region runs from a start marker to the nearest end marker after it.
/// Returns the name of the missing marker when no complete region exists.
pub fn splice(content: &str, block: &str) -> Result<String, &'static str> {
    let Some(first) = content.find(MARKER_START) else {
        return Err(if content.contains(MARKER_END) {
            MARKER_START
        } else {
            "both markers"
        });
    };

    let mut output = String::with_capacity(content.len() + block.len());
    output.push_str(&content[..first]);

    let mut rest = &content[first..];
    let mut replaced = 0;

    while let Some(start) = rest.find(MARKER_START) {
        let after_start = start + MARKER_START.len();
        let Some(end) = rest[after_start..].find(MARKER_END) else {
            break;
        };

        output.push_str(&rest[..start]);
        output.push_str(block);
        rest = &rest[after_start + end + MARKER_END.len()..];
        replaced += 1;
    }

    if replaced == 0 {
        return Err(MARKER_END);
    }

    output.push_str(rest);
    Ok(output)
}

/// Write the events block into `readme`. Returns true if the file changed.
pub fn publish(
    readme: &Path,
    upcoming: &[EventRecord],
    recent_past: &[EventRecord],
    window_label: &str,
) -> EventDirResult<bool> {
    let content = std::fs::read_to_string(readme).map_err(|e| EventDirError::file_io(readme, e))?;

    let block = render_block(upcoming, recent_past, window_label);
    let updated = splice(&content, &block).map_err(|missing| EventDirError::MarkersNotFound {
        path: readme.to_path_buf(),
        missing: missing.to_string(),
    })?;

    if updated == content {
        tracing::debug!(path = %readme.display(), "events block unchanged");
        return Ok(false);
    }

    std::fs::write(readme, updated).map_err(|e| EventDirError::file_io(readme, e))?;
    tracing::info!(path = %readme.display(), "updated events block");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Europe;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;

    fn event(title: &str, day: u32) -> EventRecord {
        EventRecord {
            id: title.to_lowercase(),
            path: PathBuf::from(format!("events/2099-01-{day:02}.yaml")),
            title: title.to_string(),
            start: Europe::London.with_ymd_and_hms(2099, 1, day, 18, 0, 0).unwrap(),
            location: "Online".to_string(),
            link: String::new(),
            summary: String::new(),
        }
    }

    const README: &str = "# Community\n\n<!-- EVENTS:START -->\nold content\n<!-- EVENTS:END -->\n\n## Contributing\n";

    #[test]
    fn block_layout() {
        let block = render_block(&[event("Meetup", 5)], &[], "90 days");
        assert_eq!(
            block,
            "<!-- EVENTS:START -->\n\
             \n\
             ### Upcoming\n\
             \n\
             | Date | Title | Location | Description | Link |\n\
             |------|-------|----------|-------------|------|\n\
             | 2099-01-05 | Meetup | Online |  |  |\n\
             \n\
             ### Recent Past (last 90 days)\n\
             \n\
             | Date | Title | Location | Description | Link |\n\
             |------|-------|----------|-------------|------|\n\
             | – | – | – | – | – |\n\
             \n\
             <!-- EVENTS:END -->"
        );
    }

    #[test]
    fn splice_replaces_region_and_keeps_surroundings() {
        let spliced = splice(README, "<!-- EVENTS:START -->\nnew\n<!-- EVENTS:END -->").unwrap();
        assert_eq!(
            spliced,
            "# Community\n\n<!-- EVENTS:START -->\nnew\n<!-- EVENTS:END -->\n\n## Contributing\n"
        );
    }

    #[test]
    fn splice_replaces_every_region() {
        let content = "<!-- EVENTS:START -->a<!-- EVENTS:END -->\nmiddle\n<!-- EVENTS:START -->b<!-- EVENTS:END -->";
        assert_eq!(splice(content, "X").unwrap(), "X\nmiddle\nX");
    }

    #[test]
    fn splice_reports_missing_markers() {
        assert_eq!(splice("# Nothing here\n", "X"), Err("both markers"));
        assert_eq!(splice("<!-- EVENTS:END -->\n", "X"), Err(MARKER_START));
        assert_eq!(splice("<!-- EVENTS:START -->\nstuff\n", "X"), Err(MARKER_END));
        assert_eq!(
            splice("<!-- EVENTS:END -->\n<!-- EVENTS:START -->\n", "X"),
            Err(MARKER_END)
        );
    }

    #[test]
    fn publish_writes_when_changed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, README).unwrap();

        assert!(publish(&path, &[event("Meetup", 5)], &[], "90 days").unwrap());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Community\n\n<!-- EVENTS:START -->\n\n### Upcoming\n"));
        assert!(written.contains("| 2099-01-05 | Meetup | Online |  |  |"));
        assert!(written.ends_with("<!-- EVENTS:END -->\n\n## Contributing\n"));
    }

    #[test]
    fn publish_round_trip_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, README).unwrap();
        let events = [event("Meetup", 5), event("Social", 9)];

        assert!(publish(&path, &events, &[], "90 days").unwrap());
        let first = fs::read(&path).unwrap();
        let modified = fs::metadata(&path).unwrap().modified().unwrap();

        assert!(!publish(&path, &events, &[], "90 days").unwrap());
        assert_eq!(fs::read(&path).unwrap(), first);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
    }

    #[test]
    fn publish_without_end_marker_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "# Community\n<!-- EVENTS:START -->\n").unwrap();

        let err = publish(&path, &[], &[], "90 days").unwrap_err();

        assert!(matches!(
            &err,
            EventDirError::MarkersNotFound { missing, .. } if missing == MARKER_END
        ));
        assert!(err.to_string().contains("<!-- EVENTS:END -->"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Community\n<!-- EVENTS:START -->\n"
        );
    }
}
