//! Tests for history navigation and branch-on-edit.

use strictly_chess::{BoardConfig, BoardController, HighlightStyle, Move, START_FEN, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(board: &mut BoardController, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        assert!(board.apply_move(&Move::new(sq(from), sq(to))), "{}{}", from, to);
    }
}

#[test]
fn test_step_back_at_start_is_idempotent() {
    let mut board = BoardController::new();
    assert!(!board.step_back());
    assert!(!board.step_back());
    assert_eq!(board.cursor(), 0);
    assert_eq!(board.fen(), START_FEN);
    assert_eq!(board.history().len(), 1);
}

#[test]
fn test_navigation_shows_stored_positions() {
    let mut board = BoardController::new();
    play(&mut board, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);
    let fens: Vec<String> = board
        .history()
        .positions()
        .map(|p| p.fen().to_string())
        .collect();

    assert!(board.go_to_start());
    assert_eq!(board.fen(), fens[0]);
    assert!(board.step_forward());
    assert!(board.step_forward());
    assert_eq!(board.fen(), fens[2]);
    assert!(board.go_to_end());
    assert_eq!(board.fen(), fens[3]);
    assert!(!board.step_forward());
    assert!(!board.go_to_end());
    assert_eq!(board.cursor(), 3);
    assert_eq!(board.history().len(), 4);
}

#[test]
fn test_move_behind_tip_starts_new_variation() {
    let mut board = BoardController::new();
    play(&mut board, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);
    let kept: Vec<String> = board
        .history()
        .positions()
        .take(2)
        .map(|p| p.fen().to_string())
        .collect();

    board.go_to_start();
    board.step_forward();
    assert_eq!(board.cursor(), 1);

    play(&mut board, &[("c7", "c5")]);
    assert_eq!(board.history().len(), 3);
    assert_eq!(board.cursor(), 2);
    let now: Vec<String> = board
        .history()
        .positions()
        .map(|p| p.fen().to_string())
        .collect();
    assert_eq!(&now[..2], &kept[..]);
    assert_eq!(board.san_moves(), vec!["e4", "c5"]);
}

#[test]
fn test_moves_are_judged_against_displayed_position() {
    let mut board = BoardController::new();
    play(&mut board, &[("e2", "e4"), ("e7", "e5")]);
    board.go_to_start();
    // Black to move at the tip, but White at the displayed position.
    assert!(!board.apply_move(&Move::new(sq("g8"), sq("f6"))));
    assert!(board.apply_move(&Move::new(sq("d2"), sq("d4"))));
    assert_eq!(board.san_moves(), vec!["d4"]);
}

#[test]
fn test_navigation_clears_selection_and_highlight() {
    let mut board = BoardController::new();
    play(&mut board, &[("e2", "e4")]);
    board.select_square(sq("e7"));
    assert!(!board.selection().is_idle());

    board.step_back();
    assert!(board.selection().is_idle());
    assert_eq!(board.last_move(), None);
    assert!(board.highlights().is_empty());

    // A no-op step still clears selection.
    board.select_square(sq("b1"));
    assert!(!board.step_back());
    assert!(board.selection().is_idle());
}

#[test]
fn test_highlight_on_navigation_restores_last_move() {
    let config = BoardConfig::default().with_highlight_on_navigation(true);
    let mut board = BoardController::with_config(config);
    play(&mut board, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);

    board.step_back();
    let highlights = board.highlights();
    assert_eq!(highlights.get(&sq("e7")), Some(&HighlightStyle::LastMove));
    assert_eq!(highlights.get(&sq("e5")), Some(&HighlightStyle::LastMove));
    assert_eq!(highlights.get(&sq("g1")), None);
}
