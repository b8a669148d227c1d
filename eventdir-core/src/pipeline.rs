//! One full update run: load, classify, archive, publish.

use chrono::{DateTime, Utc};

use crate::classify::{Classification, classify};
use crate::config::EventDirConfig;
use crate::error::EventDirResult;
use crate::event::LoadOptions;
use crate::{archive, loader, readme};

/// What an update run did.
#[derive(Debug)]
pub struct UpdateOutcome {
    pub classification: Classification,
    pub archived: usize,
    pub readme_updated: bool,
}

impl UpdateOutcome {
    pub fn changed(&self) -> bool {
        self.archived > 0 || self.readme_updated
    }
}

/// Load and classify events without touching any files.
pub fn preview(config: &EventDirConfig, now: DateTime<Utc>) -> EventDirResult<Classification> {
    let options = LoadOptions {
        default_timezone: config.default_timezone,
        skip_invalid_dates: config.skip_invalid_dates,
    };

    let records = loader::load_events(&config.events_dir, &options)?;
    Ok(classify(records, now, config.archive_after))
}

/// Archive stale events and regenerate the README events block.
pub fn run(config: &EventDirConfig, now: DateTime<Utc>) -> EventDirResult<UpdateOutcome> {
    let classification = preview(config, now)?;

    let archived = archive::archive_events(&classification.stale, &config.archive_dir)?;
    let readme_updated = readme::publish(
        &config.readme,
        &classification.upcoming,
        &classification.recent_past,
        &config.window_label(),
    )?;

    Ok(UpdateOutcome {
        classification,
        archived,
        readme_updated,
    })
}
