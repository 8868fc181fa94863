//! History linkage invariant: every entry after the first was produced by a move.

use super::super::BoardController;
use super::Invariant;

/// Invariant: entry 0 has no move record, every later entry has one, and the
/// side to move alternates from one entry to the next.
pub struct HistoryLinked;

impl Invariant<BoardController> for HistoryLinked {
    fn holds(board: &BoardController) -> bool {
        let entries = board.history().entries();
        let Some(first) = entries.first() else {
            return false;
        };
        if first.record.is_some() {
            return false;
        }
        entries.windows(2).all(|pair| {
            pair[1].record.is_some() && pair[1].position.turn() == pair[0].position.turn().opponent()
        })
    }

    fn description() -> &'static str {
        "Every history entry after the first follows from the previous one by a move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::chess::{History, HistoryEntry, Move, Position, Square};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_holds_across_variation() {
        let mut board = BoardController::new();
        assert!(board.apply_move(&Move::new(sq("e2"), sq("e4"))));
        assert!(board.apply_move(&Move::new(sq("e7"), sq("e5"))));
        board.step_back();
        assert!(board.apply_move(&Move::new(sq("c7"), sq("c5"))));
        assert!(HistoryLinked::holds(&board));
    }

    #[test]
    fn test_entry_without_record_violates() {
        let mut board = BoardController::new();
        assert!(board.apply_move(&Move::new(sq("e2"), sq("e4"))));
        let mut entries = board.history().entries().to_vec();
        entries.push(HistoryEntry {
            position: Position::start(),
            record: None,
        });
        board.history = History::from_entries_unchecked(entries);
        assert!(!HistoryLinked::holds(&board));
    }
}
