//! Stateless UI rendering.

mod board;

use crate::app::App;
use crate::layout::BoardGeometry;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strictly_chess::{self as chess, BoardController};

const HELP: &str =
    "arrows move · enter/space click · mouse click/drag · [ ] step · home/end · f flip · r reset · q quit";

/// Draws the whole screen and records the board geometry for hit-testing.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Chess")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(28)])
        .split(chunks[1]);

    let geometry = BoardGeometry::fit(body[0], app.board().config(), app.board().orientation());
    app.set_geometry(geometry);
    board::render_board(frame, &geometry, app);

    let moves = Paragraph::new(move_list(app.board()))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(moves, body[1]);

    let status = Paragraph::new(status_line(app))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Numbered move list, one line per move pair, with the displayed ply marked.
fn move_list(board: &BoardController) -> Vec<Line<'static>> {
    let entries = board.history().entries();
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for (ply, pair) in entries.windows(2).enumerate() {
        let Some(record) = &pair[1].record else {
            continue;
        };
        let before = &pair[0].position;
        let number = before.fullmove_number();
        let white_moved = before.turn() == chess::Color::White;

        if white_moved {
            if !current.is_empty() {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
            current.push(Span::raw(format!("{:>3}. ", number)));
        } else if current.is_empty() {
            current.push(Span::raw(format!("{:>3}... ", number)));
        }

        let style = if ply + 1 == board.cursor() {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default()
        };
        current.push(Span::styled(record.san.clone(), style));
        current.push(Span::raw(" "));
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

fn status_line(app: &App) -> String {
    if let Some(notice) = app.notice() {
        return notice.to_string();
    }
    let board = app.board();
    let history = board.history();
    let position = format!("position {}/{}", history.cursor(), history.len() - 1);
    match board.status_message() {
        Some(message) => format!("{}  ({})", message, position),
        None => {
            let check = if board.position().is_check() { ", check" } else { "" };
            let reviewing = if history.at_tip() { "" } else { ", reviewing" };
            format!(
                "{} to move{}  ({}{})",
                board.turn(),
                check,
                position,
                reviewing
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_chess::Move;

    fn play(board: &mut BoardController, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            assert!(board.apply_move(&Move::new(from.parse().unwrap(), to.parse().unwrap())));
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_move_list_pairs_moves() {
        let mut board = BoardController::new();
        play(&mut board, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);
        let lines = move_list(&board);
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[0]), "  1. e4 e5 ");
        assert_eq!(text(&lines[1]), "  2. Nf3 ");
    }

    #[test]
    fn test_status_line_reports_review_and_mate() {
        let mut app = App::new(BoardController::new());
        assert_eq!(status_line(&app), "White to move  (position 0/0)");

        let mut board = BoardController::new();
        play(&mut board, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]);
        app = App::new(board);
        assert_eq!(
            status_line(&app),
            "Checkmate! Black wins.  (position 4/4)"
        );
    }
}
