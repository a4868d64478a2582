//! Terminal front end for a tic-tac-toe board.
//!
//! The game rules live in [`tictactoe_core`]. This crate turns key presses
//! and mouse clicks into cell activations, draws whatever snapshot the game
//! hands back, and carries the configuration and logging around it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod play;
mod tui;

pub use config::{BoardConfig, ConfigError};
pub use play::{PlayReport, PositionError, RejectedMove, parse_positions, run_moves};
pub use tui::{App, cell_areas, draw, move_cursor, run_tui};
