use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{COLS, ROWS};
use crate::game::{Cell, Game, GameState};

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();

    // Field plus borders: 20 rows and 10 columns at 2 chars per block
    let field_height = ROWS as u16 + 2;
    let field_width = 2 * COLS as u16 + 2;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(field_height),
            Constraint::Length(1), // score line
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(field_width),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let score_area = Rect {
        x: board_area.x,
        y: vertical_chunks[2].y,
        width: board_area.width,
        height: 1,
    };

    render_board(f, game, board_area);

    match game.state() {
        GameState::Start => render_start_overlay(f, board_area),
        GameState::Playing => render_score(f, game, score_area),
        GameState::GameOver => render_game_over_overlay(f, game, board_area),
    }
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let mut cells = *game.board();

    // Composite the falling piece over a copy of the locked cells
    if game.state() == GameState::Playing {
        if let Some(piece) = game.current_piece() {
            for (x, y) in piece.blocks() {
                if x >= 0 && x < COLS as i32 && y >= 0 && y < ROWS as i32 {
                    cells[y as usize][x as usize] = Cell::Filled(piece.color);
                }
            }
        }
    }

    let mut board_lines = Vec::with_capacity(ROWS);
    for (y, row) in cells.iter().enumerate() {
        let mut line_spans = Vec::with_capacity(COLS);
        for (x, cell) in row.iter().enumerate() {
            match cell {
                Cell::Empty => {
                    if (x + y) % 2 == 0 {
                        line_spans.push(Span::styled("░░", Style::default().fg(Color::DarkGray)));
                    } else {
                        line_spans.push(Span::raw("  "));
                    }
                }
                Cell::Filled(color) => {
                    line_spans.push(Span::styled("██", Style::default().fg(*color)));
                }
            }
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_score(f: &mut Frame, game: &Game, area: Rect) {
    let score_widget = Paragraph::new(Line::from(vec![Span::styled(
        format!("LINES: {}", game.score()),
        Style::default().fg(Color::Gray),
    )]))
    .alignment(Alignment::Center);

    f.render_widget(score_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_start_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(80, 35, area);
    f.render_widget(Clear, popup_area);

    let start_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("BLOCKFALL", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Click to start")]),
        Line::from(vec![Span::raw("")]),
    ];

    let start_widget = Paragraph::new(start_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(start_widget, popup_area);
}

fn render_game_over_overlay(f: &mut Frame, game: &Game, area: Rect) {
    let popup_area = centered_rect(80, 45, area);
    f.render_widget(Clear, popup_area);

    let game_over_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("LINES: {}", game.score()))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Click to restart")]),
        Line::from(vec![Span::raw("Press Q to quit")]),
    ];

    let game_over_widget = Paragraph::new(game_over_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(game_over_widget, popup_area);
}
