//! Event records parsed from per-event YAML files.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde_yaml::{Mapping, Value};

use crate::error::{EventDirError, EventDirResult};
use crate::time::{DATE_FORMAT, parse_start, resolve_timezone};

/// One event, built from a single YAML file.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub id: String,
    pub path: PathBuf,
    pub title: String,
    pub start: DateTime<Tz>,
    pub location: String,
    pub link: String,
    pub summary: String,
}

/// Settings that affect how a single file is turned into a record.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub default_timezone: Tz,
    pub skip_invalid_dates: bool,
}

impl EventRecord {
    /// Parse one event file. Returns `Ok(None)` for drafts that lack a
    /// title or start.
    pub fn parse(path: &Path, content: &str, options: &LoadOptions) -> EventDirResult<Option<Self>> {
        if content.trim().is_empty() {
            return Ok(None);
        }

        let value: Value = serde_yaml::from_str(content).map_err(|source| EventDirError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

        let fields = match value {
            Value::Null => return Ok(None),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(EventDirError::NotAMapping {
                    path: path.to_path_buf(),
                });
            }
        };

        let (Some(title), Some(start_raw)) = (text(&fields, "title"), text(&fields, "start")) else {
            tracing::debug!(path = %path.display(), "skipping event without title or start");
            return Ok(None);
        };

        let tz = resolve_timezone(text(&fields, "timezone").as_deref(), options.default_timezone);

        let Some(start) = parse_start(&start_raw, tz) else {
            if options.skip_invalid_dates {
                tracing::warn!(path = %path.display(), start = %start_raw, "skipping event with unparsable start");
                return Ok(None);
            }
            return Err(EventDirError::InvalidStart {
                path: path.to_path_buf(),
                value: start_raw,
            });
        };

        let id = text(&fields, "id").unwrap_or_else(|| file_stem(path));
        let link = text(&fields, "link")
            .or_else(|| text(&fields, "registration_link"))
            .unwrap_or_default();

        Ok(Some(EventRecord {
            id,
            path: path.to_path_buf(),
            title,
            start,
            location: text(&fields, "location").unwrap_or_default(),
            link,
            summary: text(&fields, "summary").unwrap_or_default(),
        }))
    }

    pub fn timezone(&self) -> Tz {
        self.start.timezone()
    }

    /// `YYYY-MM-DD` in the event's own timezone.
    pub fn display_date(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn start_utc(&self) -> DateTime<Utc> {
        self.start.with_timezone(&Utc)
    }
}

/// Read a scalar field as text. Null, empty strings and collections count as absent.
fn text(fields: &Mapping, key: &str) -> Option<String> {
    let value = match fields.get(key)? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };

    if value.is_empty() { None } else { Some(value) }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
