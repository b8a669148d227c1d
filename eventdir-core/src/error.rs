//! Error types for eventdir.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while updating the events section.
#[derive(Error, Debug)]
pub enum EventDirError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not access {}: {source}", path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Expected a YAML mapping at the top of {}", path.display())]
    NotAMapping { path: PathBuf },

    #[error("Cannot parse start '{value}' in {}. Expected YYYY-MM-DD HH:MM or YYYY-MM-DD", path.display())]
    InvalidStart { path: PathBuf, value: String },

    #[error("Markers not found in {}: missing {missing}", path.display())]
    MarkersNotFound { path: PathBuf, missing: String },
}

impl EventDirError {
    pub(crate) fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EventDirError::FileIo {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for eventdir operations.
pub type EventDirResult<T> = Result<T, EventDirError>;
