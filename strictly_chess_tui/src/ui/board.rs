//! Chessboard rendering.

use crate::app::App;
use crate::layout::{BoardGeometry, FILE_GUTTER, RANK_GUTTER, to_display};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use strictly_chess::{self as chess, HighlightStyle, Orientation, Piece, PieceKind, Square};

const LIGHT: Color = Color::Rgb(240, 217, 181);
const DARK: Color = Color::Rgb(181, 136, 99);
const LAST_MOVE_LIGHT: Color = Color::Rgb(205, 210, 106);
const LAST_MOVE_DARK: Color = Color::Rgb(170, 162, 58);
const SELECTED: Color = Color::Rgb(246, 246, 105);
const CHECK: Color = Color::Rgb(231, 76, 60);
const CAPTURE: Color = Color::Rgb(214, 120, 100);
const CURSOR: Color = Color::Rgb(110, 150, 210);

/// Renders the 8x8 board with coordinates.
pub fn render_board(frame: &mut Frame, geometry: &BoardGeometry, app: &App) {
    let board = app.board();
    let highlights = board.highlights();

    for square in Square::all() {
        let piece = board.position().piece_at(square);
        let style = square_style(
            square,
            highlights.get(&square).copied(),
            square == app.cursor(),
            app.dragging() == Some(square),
        );
        let marker = match (piece, highlights.get(&square)) {
            (Some(piece), _) => glyph(piece).to_string(),
            (None, Some(HighlightStyle::LegalMove)) => "•".to_string(),
            (None, _) => String::new(),
        };
        let fg = match piece.map(|p| p.color) {
            Some(chess::Color::White) => Color::White,
            _ => Color::Black,
        };
        render_square(
            frame,
            geometry.square_rect(square),
            marker,
            style.fg(fg).add_modifier(Modifier::BOLD),
        );
    }

    render_coordinates(frame, geometry);
}

fn square_style(
    square: Square,
    highlight: Option<HighlightStyle>,
    under_cursor: bool,
    dragged: bool,
) -> Style {
    let dark = square.is_dark();
    let background = match highlight {
        Some(HighlightStyle::LastMove) if dark => LAST_MOVE_DARK,
        Some(HighlightStyle::LastMove) => LAST_MOVE_LIGHT,
        Some(HighlightStyle::Check) => CHECK,
        Some(HighlightStyle::Selected) => SELECTED,
        Some(HighlightStyle::LegalCapture) => CAPTURE,
        Some(HighlightStyle::LegalMove) | None if dark => DARK,
        Some(HighlightStyle::LegalMove) | None => LIGHT,
    };
    let background = if under_cursor { CURSOR } else { background };
    let style = Style::default().bg(background);
    if dragged {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

fn render_square(frame: &mut Frame, area: Rect, marker: String, style: Style) {
    let middle = area.height / 2;
    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            if row == middle {
                Line::from(marker.clone())
            } else {
                Line::from("")
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).style(style).alignment(Alignment::Center),
        area,
    );
}

fn render_coordinates(frame: &mut Frame, geometry: &BoardGeometry) {
    let label_style = Style::default().fg(Color::DarkGray);
    let area = geometry.area();
    let orientation = geometry.orientation();

    for rank in 0..8u8 {
        let Some(square) = Square::new(0, rank) else {
            continue;
        };
        let (_, row) = to_display(square, orientation);
        let y = area.y + u16::from(row) * geometry.square_height() + geometry.square_height() / 2;
        let label = Rect::new(area.x.saturating_sub(RANK_GUTTER), y, RANK_GUTTER, 1);
        frame.render_widget(
            Paragraph::new(format!("{}", rank + 1)).style(label_style),
            label,
        );
    }

    let files: String = (0..8u8)
        .map(|column| {
            let file = match orientation {
                Orientation::White => column,
                Orientation::Black => 7 - column,
            };
            let name = char::from(b'a' + file);
            format!("{:^width$}", name, width = usize::from(geometry.square_width()))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(files).style(label_style),
        Rect::new(area.x, area.bottom(), area.width, FILE_GUTTER),
    );
}

/// Unicode figure for a piece; colour comes from the foreground style.
fn glyph(piece: Piece) -> char {
    match piece.kind {
        PieceKind::King => '♚',
        PieceKind::Queen => '♛',
        PieceKind::Rook => '♜',
        PieceKind::Bishop => '♝',
        PieceKind::Knight => '♞',
        PieceKind::Pawn => '♟',
    }
}
