//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin
    Play {
        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Do not bracket the winning line
        #[arg(long)]
        no_highlight: bool,
    },

    /// Play the given cells (0-8) from an empty board and print the result
    Replay {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Cells to play, in order
        cells: Vec<usize>,
    },
}
