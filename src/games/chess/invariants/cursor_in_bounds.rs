//! Cursor invariant: the history is never empty and the cursor points into it.

use super::super::BoardController;
use super::Invariant;

/// Invariant: `len >= 1` and `cursor < len`.
pub struct CursorInBounds;

impl Invariant<BoardController> for CursorInBounds {
    fn holds(board: &BoardController) -> bool {
        let history = board.history();
        !history.is_empty() && history.cursor() < history.len()
    }

    fn description() -> &'static str {
        "History cursor lies within the history"
    }
}
