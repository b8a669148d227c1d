//! Moving stale event files into the archive directory.

use std::path::Path;

use crate::error::{EventDirError, EventDirResult};
use crate::event::EventRecord;

/// Move each stale event's file into `archive_dir`, keeping its file name.
///
/// Files whose name already exists in the archive are left where they are.
/// Returns the number of files moved.
pub fn archive_events(stale: &[EventRecord], archive_dir: &Path) -> EventDirResult<usize> {
    if stale.is_empty() {
        return Ok(0);
    }

    std::fs::create_dir_all(archive_dir).map_err(|e| EventDirError::file_io(archive_dir, e))?;

    let mut moved = 0;
    for record in stale {
        let Some(file_name) = record.path.file_name() else {
            continue;
        };

        let destination = archive_dir.join(file_name);
        if destination.exists() {
            tracing::debug!(
                path = %record.path.display(),
                "already archived, leaving in place"
            );
            continue;
        }

        move_file(&record.path, &destination)?;
        tracing::debug!(from = %record.path.display(), to = %destination.display(), "archived event");
        moved += 1;
    }

    if moved > 0 {
        tracing::info!(count = moved, dir = %archive_dir.display(), "archived stale events");
    }

    Ok(moved)
}

/// Rename, falling back to copy + remove when the rename fails
/// (e.g. the archive lives on another filesystem).
///
/// A failed copy removes any partial destination so the next run retries.
fn move_file(from: &Path, to: &Path) -> EventDirResult<()> {
    if let Err(rename_err) = std::fs::rename(from, to) {
        if std::fs::copy(from, to).is_err() {
            let _ = std::fs::remove_file(to);
            return Err(EventDirError::file_io(from, rename_err));
        }
        std::fs::remove_file(from).map_err(|e| EventDirError::file_io(from, e))?;
    }
    Ok(())
}
