//! Headless play: apply a list of cells and report the result.

use derive_more::{Display, Error};
use serde::Serialize;
use tictactoe_core::{BoardView, GameState, MoveError, Position};
use tracing::{info, instrument, warn};

/// A cell number outside 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell {} is out of range (expected 0-8)", index)]
pub struct PositionError {
    /// The offending index.
    pub index: usize,
}

/// A move the game refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// Where the move was attempted.
    pub position: Position,
    /// Why it was refused.
    pub error: MoveError,
}

/// Outcome of a headless run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayReport {
    /// Final board.
    pub view: BoardView,
    /// Moves that were ignored, in the order they were tried.
    pub rejected: Vec<RejectedMove>,
}

impl PlayReport {
    /// Board as text followed by the status line.
    pub fn render_text(&self) -> String {
        format!("{}\n\n{}", self.view.grid().display(), self.view.outcome())
    }
}

/// Converts raw 0-based indices into positions, failing on the first bad one.
#[instrument]
pub fn parse_positions(indices: &[usize]) -> Result<Vec<Position>, PositionError> {
    indices
        .iter()
        .map(|&index| Position::from_index(index).ok_or(PositionError { index }))
        .collect()
}

/// Plays `positions` in order on a fresh game.
///
/// Rejected moves are skipped, the same way a click on a taken cell does
/// nothing on screen.
#[instrument(skip(positions), fields(moves = positions.len()))]
pub fn run_moves(positions: &[Position]) -> PlayReport {
    let mut game = GameState::new();
    let mut rejected = Vec::new();

    for &position in positions {
        if let Err(e) = game.apply_move(position) {
            warn!(%position, error = %e, "Move ignored");
            rejected.push(RejectedMove { position, error: e });
        }
    }

    let view = game.view();
    info!(status = %view.outcome(), rejected = rejected.len(), "Play finished");
    PlayReport {
        view,
        rejected,
    }
}
