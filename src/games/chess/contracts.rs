//! Contract-based validation for board transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Legality itself belongs to the rules engine; contracts
//! guard the bookkeeping around it.

use super::action::{Move, MoveError};
use super::controller::BoardController;
use super::history::History;
use super::invariants::{BoardInvariants, InvariantSet};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Contract for appending a move to the history.
///
/// Precondition:
/// - origin and destination differ
///
/// Postconditions:
/// - entries up to the old cursor are untouched
/// - exactly one entry follows them
/// - the cursor sits on that new tip
pub struct ApplyMoveContract;

impl Contract<History, Move> for ApplyMoveContract {
    #[instrument(skip(_history))]
    fn pre(_history: &History, action: &Move) -> Result<(), MoveError> {
        if action.from == action.to {
            return Err(MoveError::IllegalMove(*action));
        }
        Ok(())
    }

    #[instrument(skip(before, after))]
    fn post(before: &History, after: &History) -> Result<(), MoveError> {
        let kept = before.cursor() + 1;
        if after.len() != kept + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "expected {} entries after move, found {}",
                kept + 1,
                after.len()
            )));
        }
        if after.entries()[..kept] != before.entries()[..kept] {
            return Err(MoveError::InvariantViolation(
                "history prefix changed".to_string(),
            ));
        }
        if !after.at_tip() {
            return Err(MoveError::InvariantViolation(
                "cursor not at tip after move".to_string(),
            ));
        }
        Ok(())
    }
}

/// Checks every board invariant (debug builds only).
#[instrument(skip(board))]
pub fn assert_invariants(board: &BoardController) {
    if cfg!(debug_assertions)
        && let Err(violations) = BoardInvariants::check_all(board)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Board invariants violated");
        debug_assert!(violations.is_empty(), "Board invariants violated: {}", descriptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::chess::{PromotionPiece, Square, rules};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn advance(history: &mut History, from: &str, to: &str) {
        let (next, record) = rules::play(
            history.current(),
            &Move::new(sq(from), sq(to)),
            PromotionPiece::Queen,
        )
        .unwrap();
        history.push(next, record);
    }

    #[test]
    fn test_precondition_rejects_null_move() {
        let history = History::default();
        assert!(matches!(
            ApplyMoveContract::pre(&history, &Move::new(sq("e2"), sq("e2"))),
            Err(MoveError::IllegalMove(_))
        ));
        assert!(ApplyMoveContract::pre(&history, &Move::new(sq("e2"), sq("e4"))).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_branching_move() {
        let mut history = History::default();
        advance(&mut history, "e2", "e4");
        advance(&mut history, "e7", "e5");
        history.go_to(1);
        let before = history.clone();
        advance(&mut history, "c7", "c5");
        assert!(ApplyMoveContract::post(&before, &history).is_ok());
    }

    #[test]
    fn test_postcondition_detects_extra_entries() {
        let before = History::default();
        let mut after = before.clone();
        advance(&mut after, "e2", "e4");
        advance(&mut after, "e7", "e5");
        assert!(ApplyMoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_cursor_off_tip() {
        let before = History::default();
        let mut after = before.clone();
        advance(&mut after, "e2", "e4");
        after.go_to(0);
        assert!(ApplyMoveContract::post(&before, &after).is_err());
    }
}
