//! Pure tic-tac-toe board logic.
//!
//! The crate owns the game rules and nothing else. A front end feeds it
//! cell activations through [`GameState::apply_move`] and redraws from the
//! [`BoardView`] it gets back.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Mark, Outcome, Position};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.current_status().to_string(), "Next Player:X");
//!
//! for pos in [0, 3, 1, 4, 2] {
//!     let pos = Position::from_index(pos).expect("index in range");
//!     game.apply_move(pos).expect("legal move");
//! }
//!
//! assert_eq!(game.current_status(), Outcome::Won(Mark::X));
//! assert_eq!(game.current_status().to_string(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
mod types;
mod view;

pub mod rules;

pub use error::MoveError;
pub use game::{GameState, Outcome};
pub use position::Position;
pub use rules::{LINES, detect_winner, winning_line};
pub use types::{Cell, Grid, Mark};
pub use view::{BoardView, CellView};
