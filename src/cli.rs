//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};

/// Strictly Timeline - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Tic-tac-toe with a navigable, branching move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the TOML config (defaults are used if it does not exist)
        #[arg(short, long, default_value = "strictly_timeline.toml")]
        config: std::path::PathBuf,
    },

    /// Apply moves headlessly and print the resulting view
    Replay {
        /// Moves in order, as cell indices (0-8) or labels like "center"
        moves: Vec<String>,

        /// History step to make active after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
