//! Win detection.

use crate::{Grid, Mark, Position};
use tracing::instrument;

/// The eight winning lines, in scan order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line, in [`LINES`] order, held entirely by one mark.
#[instrument(level = "trace")]
pub fn winning_line(grid: &Grid) -> Option<(Mark, [Position; 3])> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let mark = grid.get(a).mark()?;
        (grid.get(b).mark() == Some(mark) && grid.get(c).mark() == Some(mark))
            .then_some((mark, line))
    })
}

/// Checks if there is a winner on the grid.
///
/// Returns `Some(mark)` if a mark fills any line, `None` otherwise. The
/// first completed line in [`LINES`] order decides.
#[instrument(level = "trace")]
pub fn detect_winner(grid: &Grid) -> Option<Mark> {
    winning_line(grid).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(marks: &[(Position, Mark)]) -> Grid {
        marks
            .iter()
            .fold(Grid::new(), |grid, &(pos, mark)| grid.with_mark(pos, mark))
    }

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(detect_winner(&Grid::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let grid = grid_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(detect_winner(&grid), Some(Mark::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let grid = grid_with(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        assert_eq!(detect_winner(&grid), Some(Mark::O));
        assert_eq!(
            winning_line(&grid).map(|(_, line)| line),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let grid = grid_with(&[(Position::TopLeft, Mark::X), (Position::TopCenter, Mark::X)]);
        assert_eq!(detect_winner(&grid), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let grid = grid_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(detect_winner(&grid), None);
    }

    #[test]
    fn test_first_line_in_scan_order_reported() {
        // Top row and left column both complete; the row comes first.
        let grid = grid_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::BottomLeft, Mark::X),
        ]);
        assert_eq!(
            winning_line(&grid),
            Some((
                Mark::X,
                [Position::TopLeft, Position::TopCenter, Position::TopRight]
            ))
        );
    }
}
