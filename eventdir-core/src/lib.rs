//! Core library for eventdir.
//!
//! eventdir keeps a README events section in sync with a directory of
//! per-event YAML files:
//! - `loader` reads event files into `EventRecord`s
//! - `classify` splits them into upcoming, recent and stale
//! - `archive` moves stale files out of the way
//! - `table` and `readme` render and splice the Markdown tables
//! - `pipeline` runs the whole update

pub mod archive;
pub mod classify;
pub mod config;
pub mod error;
pub mod event;
pub mod loader;
pub mod pipeline;
pub mod readme;
pub mod table;
pub mod time;

pub use error::{EventDirError, EventDirResult};
pub use event::EventRecord;
