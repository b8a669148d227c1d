//! Loading event files from the events directory.

use std::path::{Path, PathBuf};

use crate::error::{EventDirError, EventDirResult};
use crate::event::{EventRecord, LoadOptions};

const EVENT_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Load every event file in `dir`.
///
/// A missing directory yields no events. Files are visited in path order.
pub fn load_events(dir: &Path, options: &LoadOptions) -> EventDirResult<Vec<EventRecord>> {
    let mut records = Vec::new();

    for path in event_files(dir)? {
        let content =
            std::fs::read_to_string(&path).map_err(|e| EventDirError::file_io(&path, e))?;

        if let Some(record) = EventRecord::parse(&path, &content, options)? {
            records.push(record);
        }
    }

    tracing::debug!(dir = %dir.display(), count = records.len(), "loaded events");
    Ok(records)
}

/// Event files in `dir`, sorted by path.
pub fn event_files(dir: &Path) -> EventDirResult<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(EventDirError::file_io(dir, e)),
    };

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_event_file(&path) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Event files start with a digit (usually the date) and use a YAML extension.
fn is_event_file(path: &Path) -> bool {
    let starts_with_digit = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.chars().next())
        .is_some_and(|c| c.is_ascii_digit());

    let has_yaml_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| EVENT_EXTENSIONS.contains(&e));

    starts_with_digit && has_yaml_extension
}
