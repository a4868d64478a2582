//! Move rejection.

use serde::{Deserialize, Serialize};

use crate::{Mark, Position};

/// Why a move was not applied.
///
/// Both variants are recoverable: the state is left exactly as it was and
/// the caller is free to try a different cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// A line is already complete.
    #[display("Game already won by {}", _0)]
    GameAlreadyWon(Mark),
}

impl std::error::Error for MoveError {}
