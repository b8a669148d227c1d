//! eventdir configuration.
//!
//! Settings are layered: built-in defaults, then the global
//! `~/.config/eventdir/config.toml`, then `<root>/eventdir.toml`, then
//! `EVENTDIR_*` environment variables.

use std::path::{Path, PathBuf};

use chrono::Duration;
use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{EventDirError, EventDirResult};

pub const LOCAL_CONFIG_FILE: &str = "eventdir.toml";

static DEFAULT_EVENTS_DIR: &str = "events";
static DEFAULT_ARCHIVE_DIR: &str = "archive";
static DEFAULT_README: &str = "README.md";
static DEFAULT_TIMEZONE: &str = "Europe/London";
static DEFAULT_ARCHIVE_AFTER: &str = "90days";

fn default_events_dir() -> String {
    DEFAULT_EVENTS_DIR.to_string()
}

fn default_archive_dir() -> String {
    DEFAULT_ARCHIVE_DIR.to_string()
}

fn default_readme() -> String {
    DEFAULT_README.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_archive_after() -> String {
    DEFAULT_ARCHIVE_AFTER.to_string()
}

/// Raw settings as they appear in config files and the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_events_dir")]
    pub events_dir: String,

    /// Relative to `events_dir`.
    #[serde(default = "default_archive_dir")]
    pub archive_dir: String,

    #[serde(default = "default_readme")]
    pub readme: String,

    #[serde(default = "default_timezone")]
    pub default_timezone: String,

    /// Retention window in humantime syntax, e.g. "90days" or "12w".
    #[serde(default = "default_archive_after")]
    pub archive_after: String,

    #[serde(default)]
    pub skip_invalid_dates: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            events_dir: default_events_dir(),
            archive_dir: default_archive_dir(),
            readme: default_readme(),
            default_timezone: default_timezone(),
            archive_after: default_archive_after(),
            skip_invalid_dates: false,
        }
    }
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct EventDirConfig {
    pub root: PathBuf,
    pub events_dir: PathBuf,
    pub archive_dir: PathBuf,
    pub readme: PathBuf,
    pub default_timezone: Tz,
    pub archive_after: Duration,
    pub skip_invalid_dates: bool,
}

impl EventDirConfig {
    /// Global config file location (~/.config/eventdir/config.toml).
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("eventdir").join("config.toml"))
    }

    /// Load configuration for the repository at `root`.
    pub fn load(root: &Path) -> EventDirResult<Self> {
        Self::load_with_global(root, Self::global_config_path())
    }

    fn load_with_global(root: &Path, global: Option<PathBuf>) -> EventDirResult<Self> {
        let mut builder = Config::builder();

        if let Some(global) = global {
            builder = builder.add_source(File::from(global).required(false));
        }

        let settings: Settings = builder
            .add_source(File::from(root.join(LOCAL_CONFIG_FILE)).required(false))
            .add_source(Environment::with_prefix("EVENTDIR").try_parsing(true))
            .build()
            .map_err(|e| EventDirError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventDirError::Config(e.to_string()))?;

        Self::from_settings(root, settings)
    }

    /// Validate raw settings and resolve paths against `root`.
    pub fn from_settings(root: &Path, settings: Settings) -> EventDirResult<Self> {
        let default_timezone: Tz = settings.default_timezone.parse().map_err(|_| {
            EventDirError::Config(format!(
                "Unknown default_timezone '{}'",
                settings.default_timezone
            ))
        })?;

        let window = humantime::parse_duration(&settings.archive_after).map_err(|e| {
            EventDirError::Config(format!(
                "Invalid archive_after '{}': {e}",
                settings.archive_after
            ))
        })?;
        let archive_after = Duration::from_std(window).map_err(|_| {
            EventDirError::Config(format!("archive_after '{}' is too large", settings.archive_after))
        })?;

        let events_dir = resolve_path(root, &settings.events_dir);
        let archive_dir = resolve_path(&events_dir, &settings.archive_dir);
        let readme = resolve_path(root, &settings.readme);

        Ok(EventDirConfig {
            root: root.to_path_buf(),
            events_dir,
            archive_dir,
            readme,
            default_timezone,
            archive_after,
            skip_invalid_dates: settings.skip_invalid_dates,
        })
    }

    /// Human-readable retention window, used in the "Recent Past" heading.
    pub fn window_label(&self) -> String {
        let secs = self.archive_after.num_seconds();
        if secs > 0 && secs % 86_400 == 0 {
            let days = secs / 86_400;
            if days == 1 {
                "1 day".to_string()
            } else {
                format!("{days} days")
            }
        } else {
            let std = self.archive_after.to_std().unwrap_or_default();
            humantime::format_duration(std).to_string()
        }
    }
}

/// Expand `~` and join relative paths onto `base`.
fn resolve_path(base: &Path, raw: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}
