//! Command-line interface for touchtoe.

use clap::{Parser, Subcommand};

/// Touchtoe - touch-panel tic-tac-toe with an unbeatable engine
#[derive(Parser, Debug)]
#[command(name = "touchtoe")]
#[command(about = "Touch-panel tic-tac-toe played in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play on the emulated touch panel (mouse click = touch, q quits)
    Play {
        /// Path to the TOML configuration (defaults apply if missing)
        #[arg(short, long, default_value = "touchtoe.toml")]
        config: std::path::PathBuf,

        /// Log file, overrides the configured one
        #[arg(long)]
        log_file: Option<std::path::PathBuf>,
    },

    /// Let the engine play both sides and print the final board
    SelfPlay {
        /// Cell (1-9, row-major) Cross opens with instead of asking the engine
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
        opening: Option<u8>,
    },

    /// Print the default configuration as TOML
    DefaultConfig,
}
