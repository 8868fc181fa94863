//! First-class invariants for the board controller.
//!
//! Invariants are logical properties that must hold after every public
//! operation. They are checked in debug builds and tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose as types.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all hold, or every violation otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [(fn(&S) -> bool, &'static str); 3] = [
            (I1::holds, I1::description()),
            (I2::holds, I2::description()),
            (I3::holds, I3::description()),
        ];
        let violations: Vec<_> = checks
            .into_iter()
            .filter(|(holds, _)| !holds(state))
            .map(|(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod cursor_in_bounds;
pub mod history_linked;
pub mod selection_consistent;

pub use cursor_in_bounds::CursorInBounds;
pub use history_linked::HistoryLinked;
pub use selection_consistent::SelectionConsistent;

/// All board invariants as a composable set.
pub type BoardInvariants = (CursorInBounds, SelectionConsistent, HistoryLinked);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::chess::{BoardController, Move, Selection, Square};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_new_board() {
        let board = BoardController::new();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut board = BoardController::new();
        assert!(board.apply_move(&Move::new(sq("d2"), sq("d4"))));
        assert!(board.apply_move(&Move::new(sq("g8"), sq("f6"))));
        board.select_square(sq("c1"));
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut board = BoardController::new();
        board.selection = Selection::PieceSelected {
            square: sq("e4"),
            destinations: vec![sq("e5")],
        };
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, SelectionConsistent::description());
    }
}
