//! Stateless rendering of the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Cell, Mark, Position};

use super::App;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws title, board and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title_area, board_area, status_area] = screen_areas(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_board(frame, board_area, app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

/// Screen areas of the nine cells, row-major, for a frame of size `area`.
///
/// Mouse hit-testing uses the same geometry as drawing.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let [_, board_area, _] = screen_areas(area);
    let board = center_rect(board_area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = cell_area;
        }
    }
    cells
}

fn screen_areas(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Title
            Constraint::Min(BOARD_HEIGHT),  // Board
            Constraint::Length(3),          // Status
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let cells = cell_areas(frame.area());
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    // Grid lines sit between the cells.
    for row in 1..3u16 {
        let y = board.y + row * (CELL_HEIGHT + 1) - 1;
        if y < board.bottom() {
            let sep = Paragraph::new("─".repeat(board.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, Rect::new(board.x, y, board.width, 1));
        }
    }
    for col in 1..3u16 {
        let x = board.x + col * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = board.y + row * (CELL_HEIGHT + 1);
            if x < board.right() && y < board.bottom() {
                let height = CELL_HEIGHT.min(board.bottom() - y);
                let sep = Paragraph::new(vec![Line::from("│"); height as usize])
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(sep, Rect::new(x, y, 1, height));
            }
        }
    }

    for pos in Position::ALL {
        draw_cell(frame, cells[pos.index()], app, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let view = app.view();

    let (symbol, base_style) = match view.cell(pos).cell {
        Cell::Empty if app.show_cell_numbers() => (
            format!(" {} ", pos.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Marked(Mark::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if view.is_winning_cell(pos) {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let lines = vec![Line::default(), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
