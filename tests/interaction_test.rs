//! Tests for the interaction surface: clicks, drops and event payloads.

use strictly_chess::{
    BoardCommand, BoardController, BoardEvent, DropResponse, HighlightStyle, Move, PointerTracker,
    START_FEN, Square, dispatch, legal_destinations,
};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_click_click_equals_drag_drop() {
    let start = BoardController::new();
    for from in Square::all() {
        for to in legal_destinations(start.position(), from) {
            let mut clicked = start.clone();
            clicked.on_square_click(from);
            clicked.on_square_click(to);

            let mut dropped = start.clone();
            assert!(dropped.on_piece_drop(from, to));

            assert_eq!(clicked.fen(), dropped.fen());
            assert_eq!(clicked.history(), dropped.history());
            assert_eq!(clicked.last_move(), dropped.last_move());
            assert_eq!(clicked.selection(), dropped.selection());
        }
    }
}

#[test]
fn test_drop_clears_pending_selection() {
    let mut board = BoardController::new();
    board.on_square_click(sq("b1"));
    assert!(!board.on_piece_drop(sq("e2"), sq("e5")));
    assert!(board.selection().is_idle());
}

#[test]
fn test_json_events_drive_the_board() {
    let mut board = BoardController::new();
    let payloads = [
        r#"{"type":"squareClick","square":"g1"}"#,
        r#"{"type":"squareClick","square":"f3"}"#,
        r#"{"type":"pieceDrop","sourceSquare":"d7","targetSquare":"d5","piece":"bP"}"#,
    ];
    for payload in payloads {
        let command = BoardCommand::try_from(BoardEvent::from_json(payload).unwrap()).unwrap();
        assert_eq!(dispatch(&mut board, command), DropResponse::Accepted);
    }
    assert_eq!(board.san_moves(), vec!["Nf3", "d5"]);

    let illegal = r#"{"type":"pieceDrop","sourceSquare":"f3","targetSquare":"f5","piece":"wN"}"#;
    let command = BoardCommand::try_from(BoardEvent::from_json(illegal).unwrap()).unwrap();
    assert_eq!(dispatch(&mut board, command), DropResponse::Snapback);
    assert_eq!(board.history().len(), 3);
}

#[test]
fn test_explicit_promotion_drop() {
    let mut board = BoardController::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1", Default::default())
        .unwrap();
    let command = BoardCommand::Drop(Move::with_promotion(
        sq("a7"),
        sq("a8"),
        strictly_chess::PromotionPiece::Knight,
    ));
    assert_eq!(dispatch(&mut board, command), DropResponse::Accepted);
    assert_eq!(board.san_moves(), vec!["a8=N"]);
}

#[test]
fn test_pointer_gestures_through_dispatch() {
    let mut board = BoardController::new();
    let mut tracker = PointerTracker::new();

    // Drag e2 to e4.
    tracker.press(sq("e2"), true);
    let command = tracker.release(Some(sq("e4"))).unwrap();
    assert_eq!(dispatch(&mut board, command), DropResponse::Accepted);

    // Click e7, then click e5.
    tracker.press(sq("e7"), true);
    let command = tracker.release(Some(sq("e7"))).unwrap();
    dispatch(&mut board, command);
    assert_eq!(board.selection().square(), Some(sq("e7")));
    assert_eq!(board.highlights()[&sq("e5")], HighlightStyle::LegalMove);

    tracker.press(sq("e5"), false);
    let command = tracker.release(Some(sq("e5"))).unwrap();
    dispatch(&mut board, command);
    assert_eq!(board.san_moves(), vec!["e4", "e5"]);
}

#[test]
fn test_click_sequence_selects_then_moves() {
    let mut board = BoardController::new();
    board.on_square_click(sq("e4"));
    assert!(board.selection().is_idle());
    assert_eq!(board.fen(), START_FEN);

    board.on_square_click(sq("e2"));
    assert_eq!(board.selection().destinations(), &[sq("e3"), sq("e4")]);
    board.on_square_click(sq("e4"));
    assert!(board.selection().is_idle());
    assert_eq!(board.history().len(), 2);
}
