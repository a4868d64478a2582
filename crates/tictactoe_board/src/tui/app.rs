//! Application state and input handling.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictactoe_core::{BoardView, GameState, Position};
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};

/// Main application state.
///
/// Owns the single [`GameState`] and the last snapshot it returned.
#[derive(Debug)]
pub struct App {
    game: GameState,
    view: BoardView,
    cursor: Position,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates an app with a fresh game and the cursor in the center.
    pub fn new(show_cell_numbers: bool) -> Self {
        let game = GameState::new();
        let view = game.view();
        Self {
            game,
            view,
            cursor: Position::Center,
            show_cell_numbers,
            should_quit: false,
        }
    }

    /// Snapshot to draw.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line text.
    pub fn status(&self) -> String {
        self.view.outcome().to_string()
    }

    /// Activates a cell. Returns whether the move was accepted.
    #[instrument(skip(self))]
    pub fn activate(&mut self, pos: Position) -> bool {
        match self.game.apply_move(pos) {
            Ok(view) => {
                self.view = view;
                true
            }
            Err(e) => {
                // Clicking a taken cell or a finished board is a no-op.
                debug!(error = %e, "Activation ignored");
                false
            }
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate(self.cursor);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(pos) = digit_position(other) {
                    self.cursor = pos;
                    self.activate(pos);
                }
            }
        }
    }

    /// Handles a left click at terminal coordinates against the drawn cells.
    #[instrument(skip(self, cells))]
    pub fn handle_click(&mut self, column: u16, row: u16, cells: &[Rect; 9]) {
        let hit = cells
            .iter()
            .position(|r| column >= r.x && column < r.right() && row >= r.y && row < r.bottom())
            .and_then(Position::from_index);

        if let Some(pos) = hit {
            self.cursor = pos;
            self.activate(pos);
        }
    }

    /// Starts over with a new game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::new();
        self.view = self.game.view();
    }
}
