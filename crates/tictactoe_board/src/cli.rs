//! Command-line interface for tictactoe_board.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe on a terminal board
#[derive(Parser, Debug)]
#[command(name = "tictactoe_board")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "tictactoe_board.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively with keyboard and mouse
    Tui,

    /// Apply moves without a UI and print the resulting board
    Play {
        /// Cells to activate in order (0-8, row-major)
        cells: Vec<usize>,

        /// Print the board snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}
