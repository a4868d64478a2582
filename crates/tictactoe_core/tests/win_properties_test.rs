//! Property tests for win detection.

use proptest::prelude::*;
use tictactoe_core::{Cell, GameState, Grid, LINES, Mark, Outcome, Position, detect_winner};

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Marked(Mark::X)),
        Just(Cell::Marked(Mark::O)),
    ]
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform9(arb_cell()).prop_map(Grid::from_cells)
}

fn arb_moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..9, 0..20)
}

proptest! {
    #[test]
    fn detect_winner_is_idempotent(grid in arb_grid()) {
        let first = detect_winner(&grid);
        prop_assert_eq!(detect_winner(&grid), first);
        prop_assert_eq!(detect_winner(&grid), first);
    }

    #[test]
    fn detect_winner_does_not_touch_grid(grid in arb_grid()) {
        let copy = grid;
        let _ = detect_winner(&grid);
        prop_assert_eq!(grid, copy);
    }

    #[test]
    fn winner_always_holds_a_full_line(grid in arb_grid()) {
        if let Some(mark) = detect_winner(&grid) {
            let held = LINES
                .iter()
                .any(|line| line.iter().all(|&p| grid.get(p) == Cell::Marked(mark)));
            prop_assert!(held);
        }
    }

    #[test]
    fn rejected_moves_never_change_state(moves in arb_moves()) {
        let mut game = GameState::new();
        for i in moves {
            let pos = Position::from_index(i).unwrap();
            let before = game.clone();
            if game.apply_move(pos).is_err() {
                prop_assert_eq!(&game, &before);
            }
        }
    }

    #[test]
    fn marks_never_differ_by_more_than_one(moves in arb_moves()) {
        let mut game = GameState::new();
        for i in moves {
            let _ = game.apply_move(Position::from_index(i).unwrap());
        }
        let count = |m| game.grid().cells().iter().filter(|&&c| c == Cell::Marked(m)).count();
        let (x, o) = (count(Mark::X), count(Mark::O));
        prop_assert!(x == o || x == o + 1);
        let expected_turn = if x == o { Mark::X } else { Mark::O };
        prop_assert_eq!(game.turn(), expected_turn);
    }

    #[test]
    fn no_moves_accepted_once_won(moves in arb_moves()) {
        let mut game = GameState::new();
        for i in moves {
            let was_won = matches!(game.current_status(), Outcome::Won(_));
            let accepted = game.apply_move(Position::from_index(i).unwrap()).is_ok();
            prop_assert!(!(was_won && accepted));
        }
    }
}

#[test]
fn test_every_line_filled_by_x_wins() {
    for line in LINES {
        let grid = line
            .iter()
            .fold(Grid::new(), |grid, &pos| grid.with_mark(pos, Mark::X));
        assert_eq!(detect_winner(&grid), Some(Mark::X), "line {:?}", line);
    }
}

#[test]
fn test_two_lines_same_mark_single_winner() {
    let grid = [0, 1, 2, 3, 6]
        .into_iter()
        .filter_map(Position::from_index)
        .fold(Grid::new(), |grid, pos| grid.with_mark(pos, Mark::X));
    assert_eq!(detect_winner(&grid), Some(Mark::X));
}

#[test]
fn test_full_grid_no_line_has_no_winner() {
    let (x, o) = (Cell::Marked(Mark::X), Cell::Marked(Mark::O));
    let grid = Grid::from_cells([x, o, x, x, o, o, o, x, x]);
    assert_eq!(detect_winner(&grid), None);
}
