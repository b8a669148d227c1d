use anyhow::Result;
use chrono::Utc;
use eventdir_core::config::EventDirConfig;
use eventdir_core::pipeline;

/// Token printed when files were moved or the README was rewritten.
const CHANGES: &str = "changes";
const NO_CHANGES: &str = "nochanges";

pub fn run(config: &EventDirConfig) -> Result<()> {
    let outcome = pipeline::run(config, Utc::now())?;

    tracing::info!(
        upcoming = outcome.classification.upcoming.len(),
        recent_past = outcome.classification.recent_past.len(),
        archived = outcome.archived,
        readme_updated = outcome.readme_updated,
        "update finished"
    );

    println!("{}", token(outcome.changed()));

    Ok(())
}

fn token(changed: bool) -> &'static str {
    if changed { CHANGES } else { NO_CHANGES }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_changes_only_when_something_changed() {
        assert_eq!(token(true), "changes");
        assert_eq!(token(false), "nochanges");
    }
}
