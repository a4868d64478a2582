//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`](crate::Grid) snapshot, kept apart from
//! the state that owns the grid.

pub mod win;

pub use win::{LINES, detect_winner, winning_line};
