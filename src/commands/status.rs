use anyhow::Result;
use chrono::Utc;
use eventdir_core::config::EventDirConfig;
use eventdir_core::pipeline;
use owo_colors::OwoColorize;

use crate::render::{Render, render_section};

pub fn run(config: &EventDirConfig) -> Result<()> {
    let classification = pipeline::preview(config, Utc::now())?;

    println!("{}", "Paths".bold());
    println!("  Events:   {}", config.events_dir.display());
    println!("  Archive:  {}", config.archive_dir.display());
    println!("  README:   {}", config.readme.display());
    println!();

    println!("{}", render_section("Upcoming", &classification.upcoming));
    println!();
    println!(
        "{}",
        render_section(
            &format!("Recent Past (last {})", config.window_label()),
            &classification.recent_past
        )
    );

    if !classification.stale.is_empty() {
        println!();
        println!("{}", "To archive on next update".yellow().bold());
        for record in &classification.stale {
            println!("  {}", record.render().yellow());
        }
    }

    Ok(())
}
