//! Append-only position history with a review cursor.
//!
//! Index 0 is the initial position. The cursor can be moved freely for
//! review; pushing a new entry while the cursor is behind the tip discards
//! everything after the cursor first (branch on edit).

use super::action::MoveRecord;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One reached position plus the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The position reached.
    pub position: Position,
    /// The move that led here; `None` for the initial entry.
    pub record: Option<MoveRecord>,
}

/// Ordered sequence of positions with a cursor in `[0, len - 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    /// Creates a history holding only `initial`.
    #[instrument(skip(initial), fields(fen = %initial.fen()))]
    pub fn new(initial: Position) -> Self {
        Self {
            entries: vec![HistoryEntry {
                position: initial,
                record: None,
            }],
            cursor: 0,
        }
    }

    /// Number of entries (always at least 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least its initial position.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the cursor sits on the last entry.
    pub fn at_tip(&self) -> bool {
        self.cursor + 1 == self.entries.len()
    }

    /// All entries, initial first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry under the cursor.
    pub fn current_entry(&self) -> &HistoryEntry {
        // cursor < len is maintained by every mutation.
        &self.entries[self.cursor]
    }

    /// Position under the cursor.
    pub fn current(&self) -> &Position {
        &self.current_entry().position
    }

    /// All positions, initial first.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.entries.iter().map(|e| &e.position)
    }

    /// Appends a position reached from the cursor and moves the cursor onto it.
    ///
    /// Entries after the cursor are dropped first.
    #[instrument(skip(self, position, record), fields(cursor = self.cursor, len = self.entries.len()))]
    pub fn push(&mut self, position: Position, record: MoveRecord) {
        let dropped = self.entries.len() - (self.cursor + 1);
        if dropped > 0 {
            debug!(dropped, "Starting new variation");
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            position,
            record: Some(record),
        });
        self.cursor = self.entries.len() - 1;
    }

    #[cfg(test)]
    pub(crate) fn from_entries_unchecked(entries: Vec<HistoryEntry>) -> Self {
        let cursor = entries.len().saturating_sub(1);
        Self { entries, cursor }
    }

    /// Discards everything and starts over from `initial`.
    #[instrument(skip(self, initial))]
    pub fn reset(&mut self, initial: Position) {
        *self = Self::new(initial);
    }

    /// Moves the cursor to index 0. Returns whether it moved.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn go_to_start(&mut self) -> bool {
        self.go_to(0)
    }

    /// Moves the cursor one entry back. No-op at index 0.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn step_back(&mut self) -> bool {
        match self.cursor.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    /// Moves the cursor one entry forward. No-op at the tip.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn step_forward(&mut self) -> bool {
        self.go_to(self.cursor + 1)
    }

    /// Moves the cursor to the tip. Returns whether it moved.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn go_to_end(&mut self) -> bool {
        self.go_to(self.entries.len() - 1)
    }

    /// Moves the cursor to `index`, clamped to the valid range.
    ///
    /// Returns whether the cursor changed.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.entries.len()))]
    pub fn go_to(&mut self, index: usize) -> bool {
        let target = index.min(self.entries.len() - 1);
        if target == self.cursor {
            debug!("Cursor unchanged");
            return false;
        }
        self.cursor = target;
        debug!(cursor = self.cursor, "Cursor moved");
        true
    }

    /// How often the current position's repetition key occurs up to the cursor.
    pub fn repetitions(&self) -> usize {
        let key = self.current().repetition_key();
        self.entries[..=self.cursor]
            .iter()
            .filter(|e| e.position.repetition_key() == key)
            .count()
    }

    /// SAN of every move in the history, tip included.
    pub fn san_moves(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| e.record.as_ref().map(|r| r.san.as_str()))
            .collect()
    }

    /// Numbered movetext such as `1. e4 e5 2. Nf3`.
    ///
    /// Numbering follows the initial position's move number and side to move.
    pub fn movetext(&self) -> String {
        let initial = &self.entries[0].position;
        let mut number = initial.fullmove_number();
        let mut white_to_move = initial.turn() == super::types::Color::White;
        let mut parts = Vec::new();
        for (i, san) in self.san_moves().into_iter().enumerate() {
            if white_to_move {
                parts.push(format!("{}. {}", number, san));
            } else if i == 0 {
                parts.push(format!("{}... {}", number, san));
            } else {
                parts.push(san.to_string());
            }
            if !white_to_move {
                number += 1;
            }
            white_to_move = !white_to_move;
        }
        parts.join(" ")
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Position::start())
    }
}
