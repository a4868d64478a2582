//! Interactive terminal board.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::move_cursor;
pub use ui::{cell_areas, draw};

use crate::BoardConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{debug, error, info, instrument, warn};

/// Runs the interactive board until the user quits.
pub fn run_tui(config: &BoardConfig) -> Result<()> {
    // Log to a file so tracing output doesn't scribble over the board.
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(*config.show_cell_numbers());
    let res = run_app(&mut terminal, &mut app);

    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(status = %app.status(), "TUI exited");
    res
}

/// Raw mode and alternate screen, undone on drop however the TUI exits.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on, dropping the guard restores the terminal.
        let guard = TerminalGuard;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        let mut stdout = io::stdout();
        if let Err(e) = leave_screen(&mut stdout) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Leaves the alternate screen, stops mouse capture and shows the cursor.
fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, cursor::Show)
}

/// Draw, wait for one event, apply it. Every move is handled to completion
/// before the next event is read.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let frame = terminal.draw(|f| draw(f, app))?;
        let cells = cell_areas(frame.area);

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug!(code = ?key.code, "Key pressed");
                app.handle_key(key.code);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                debug!(column = mouse.column, row = mouse.row, "Mouse click");
                app.handle_click(mouse.column, mouse.row, &cells);
            }
            _ => {}
        }
    }

    Ok(())
}
