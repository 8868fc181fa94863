//! Selection invariant: a selection matches the displayed position.

use super::super::{BoardController, Selection, rules};
use super::Invariant;

/// Invariant: a selected square holds a piece and its cached destinations
/// are exactly what the rules engine reports for it.
pub struct SelectionConsistent;

impl Invariant<BoardController> for SelectionConsistent {
    fn holds(board: &BoardController) -> bool {
        match board.selection() {
            Selection::Idle => true,
            Selection::PieceSelected {
                square,
                destinations,
            } => {
                board.position().piece_at(*square).is_some()
                    && *destinations == rules::legal_destinations(board.position(), *square)
            }
        }
    }

    fn description() -> &'static str {
        "Selected square holds a piece and its destinations are current"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::chess::Square;

    #[test]
    fn test_holds_after_selection() {
        let mut board = BoardController::new();
        board.select_square("g1".parse::<Square>().unwrap());
        assert!(SelectionConsistent::holds(&board));
    }

    #[test]
    fn test_stale_destinations_violate() {
        let mut board = BoardController::new();
        board.selection = Selection::PieceSelected {
            square: "g1".parse().unwrap(),
            destinations: vec!["g3".parse().unwrap()],
        };
        assert!(!SelectionConsistent::holds(&board));
    }
}
