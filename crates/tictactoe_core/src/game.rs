//! Game state and move application.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::rules::detect_winner;
use crate::{BoardView, Grid, Mark, MoveError, Position};

/// Where the game stands, derived from the grid and the turn.
///
/// There is no draw: a full grid without a completed line is still
/// `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete yet.
    InProgress {
        /// Mark that plays next.
        next: Mark,
    },
    /// A line is held by this mark.
    Won(Mark),
}

impl Outcome {
    /// The winner, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            Outcome::InProgress { .. } => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(mark) => write!(f, "Winner: {}", mark),
            // No space after the colon; consumers compare this text verbatim.
            Outcome::InProgress { next } => write!(f, "Next Player:{}", next),
        }
    }
}

/// The grid and whose turn it is.
///
/// This is the only mutable state in a game. The front end owns it and
/// moves go through `&mut self`, so two moves can never interleave.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    grid: Grid,
    turn: Mark,
}

impl GameState {
    /// Creates a new game: empty grid, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mark that plays next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Places the current turn's mark at `pos` and flips the turn.
    ///
    /// Returns the new board snapshot for the front end to draw. On error
    /// nothing changes.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, pos: Position) -> Result<BoardView, MoveError> {
        if !self.grid.is_empty(pos) {
            debug!(%pos, "Rejected move on occupied cell");
            return Err(MoveError::CellOccupied(pos));
        }

        if let Some(winner) = detect_winner(&self.grid) {
            debug!(%pos, %winner, "Rejected move after win");
            return Err(MoveError::GameAlreadyWon(winner));
        }

        self.grid = self.grid.with_mark(pos, self.turn);
        self.turn = self.turn.opponent();

        let view = self.view();
        debug!(%pos, status = %view.outcome(), "Move applied");
        Ok(view)
    }

    /// Recomputes the outcome from the grid.
    #[instrument(skip(self))]
    pub fn current_status(&self) -> Outcome {
        match detect_winner(&self.grid) {
            Some(mark) => Outcome::Won(mark),
            None => Outcome::InProgress { next: self.turn },
        }
    }

    /// Snapshot of the current state for display.
    pub fn view(&self) -> BoardView {
        BoardView::new(self.grid, self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn play(game: &mut GameState, indices: &[usize]) {
        for &i in indices {
            let pos = Position::from_index(i).unwrap();
            game.apply_move(pos).unwrap();
        }
    }

    #[test]
    fn test_new_game_x_first() {
        let game = GameState::new();
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.grid(), &Grid::new());
        assert_eq!(game.current_status().to_string(), "Next Player:X");
    }

    #[test]
    fn test_move_places_mark_and_flips_turn() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();

        assert_eq!(game.grid().get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(game.turn(), Mark::O);
        assert_eq!(game.current_status().to_string(), "Next Player:O");
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        let before = game.clone();

        assert_eq!(
            game.apply_move(Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_turn_flips_on_winning_move() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);

        assert_eq!(game.current_status(), Outcome::Won(Mark::X));
        assert_eq!(game.turn(), Mark::O);
    }

    #[test]
    fn test_occupied_checked_before_win() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);

        assert_eq!(
            game.apply_move(Position::TopLeft),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
        assert_eq!(
            game.apply_move(Position::BottomRight),
            Err(MoveError::GameAlreadyWon(Mark::X))
        );
    }

    #[test]
    fn test_returned_view_matches_state() {
        let mut game = GameState::new();
        let view = game.apply_move(Position::TopRight).unwrap();
        assert_eq!(view, game.view());
    }
}
