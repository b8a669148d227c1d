mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eventdir_core::config::EventDirConfig;

#[derive(Parser)]
#[command(name = "eventdir")]
#[command(about = "Keep a README events section in sync with a directory of event files")]
struct Cli {
    /// Repository root containing the events directory and README
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Archive stale events and regenerate the README events block (default)
    Update,
    /// Show how events are classified right now, without changing any files
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = EventDirConfig::load(&cli.root)
        .with_context(|| format!("Could not load configuration for {}", cli.root.display()))?;

    match cli.command.unwrap_or(Commands::Update) {
        Commands::Update => commands::update::run(&config),
        Commands::Status => commands::status::run(&config),
    }
}

/// Logs go to stderr so stdout only ever carries the result token.
fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("EVENTDIR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}
