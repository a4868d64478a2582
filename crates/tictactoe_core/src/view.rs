//! Read-only snapshots handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::rules::winning_line;
use crate::{Cell, Grid, Mark, Outcome, Position};

/// One cell as the front end sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Handle to pass back to [`GameState::apply_move`](crate::GameState::apply_move).
    pub position: Position,
    /// What the cell holds.
    pub cell: Cell,
    /// Whether activating this cell would be accepted.
    pub available: bool,
}

/// Everything needed to draw the board once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    cells: [CellView; 9],
    outcome: Outcome,
    winning_line: Option<[Position; 3]>,
}

impl BoardView {
    pub(crate) fn new(grid: Grid, turn: Mark) -> Self {
        let won = winning_line(&grid);
        let outcome = match won {
            Some((mark, _)) => Outcome::Won(mark),
            None => Outcome::InProgress { next: turn },
        };
        let cells = Position::ALL.map(|position| {
            let cell = grid.get(position);
            CellView {
                position,
                cell,
                available: cell.is_empty() && won.is_none(),
            }
        });

        Self {
            cells,
            outcome,
            winning_line: won.map(|(_, line)| line),
        }
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[CellView; 9] {
        &self.cells
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.index()]
    }

    /// The grid these cells were taken from.
    pub fn grid(&self) -> Grid {
        Grid::from_cells(self.cells.map(|c| c.cell))
    }

    /// Game outcome; its `Display` is the status line.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The completed line, if the game is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// True if `pos` is part of the completed line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_all_available() {
        let view = BoardView::new(Grid::new(), Mark::X);
        assert!(view.cells().iter().all(|c| c.available));
        assert_eq!(view.outcome(), Outcome::InProgress { next: Mark::X });
        assert_eq!(view.winning_line(), None);
    }

    #[test]
    fn test_won_grid_nothing_available() {
        let grid = Grid::new()
            .with_mark(Position::TopLeft, Mark::O)
            .with_mark(Position::MiddleLeft, Mark::O)
            .with_mark(Position::BottomLeft, Mark::O);
        let view = BoardView::new(grid, Mark::X);

        assert!(view.cells().iter().all(|c| !c.available));
        assert_eq!(view.outcome(), Outcome::Won(Mark::O));
        assert!(view.is_winning_cell(Position::MiddleLeft));
        assert!(!view.is_winning_cell(Position::Center));
    }

    #[test]
    fn test_occupied_cell_unavailable() {
        let grid = Grid::new().with_mark(Position::Center, Mark::X);
        let view = BoardView::new(grid, Mark::O);

        assert!(!view.cell(Position::Center).available);
        assert!(view.cell(Position::TopLeft).available);
        assert_eq!(view.cell(Position::Center).cell, Cell::Marked(Mark::X));
    }

    #[test]
    fn test_grid_rebuilt_from_cells() {
        let grid = Grid::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::BottomRight, Mark::O);
        assert_eq!(BoardView::new(grid, Mark::X).grid(), grid);
    }
}
