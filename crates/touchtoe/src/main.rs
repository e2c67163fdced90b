//! Touchtoe - touch-panel tic-tac-toe played in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod self_play;
mod terminal;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,touchtoe=debug,touchtoe_core=debug";

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, log_file } => run_play(&config, log_file),
        Command::SelfPlay { opening } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            self_play::run(opening)
        }
        Command::DefaultConfig => {
            print!("{}", AppConfig::default().to_toml()?);
            Ok(())
        }
    }
}

/// Loads the configuration, starts file logging and runs the terminal panel.
fn run_play(config_path: &Path, log_file: Option<PathBuf>) -> Result<()> {
    let mut config = AppConfig::load(config_path)?;
    if let Some(path) = log_file {
        config = config.with_log_file(path);
    }

    // Log to a file so the alternate screen stays clean
    let file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    info!(
        config = %config_path.display(),
        log_file = %config.log_file().display(),
        "Starting touchtoe"
    );
    terminal::run(&config)
}
