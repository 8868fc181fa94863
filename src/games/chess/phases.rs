//! Interaction phases and game status.
//!
//! The widget has two selection phases, `Idle` and `PieceSelected`. The
//! history cursor is orthogonal to them and every navigation step returns
//! the selection to `Idle`.

use super::types::{Color, Square};
use serde::{Deserialize, Serialize};

/// Selection state of the board.
///
/// Destinations are derived from the position and the selected square when
/// the selection is made; they are never edited independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// One square selected, with its legal destinations.
    PieceSelected {
        /// The selected square.
        square: Square,
        /// Squares the selected piece can legally move to.
        destinations: Vec<Square>,
    },
}

impl Selection {
    /// The selected square, if any.
    pub fn square(&self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::PieceSelected { square, .. } => Some(*square),
        }
    }

    /// Legal destinations of the selected piece (empty when idle).
    pub fn destinations(&self) -> &[Square] {
        match self {
            Selection::Idle => &[],
            Selection::PieceSelected { destinations, .. } => destinations,
        }
    }

    /// Returns true when nothing is selected.
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}

/// Terminal-state report for the displayed position.
///
/// Used only to produce an end-of-game message; it never blocks
/// interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The side to move is checkmated.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// Neither side can mate.
    InsufficientMaterial,
    /// The same position occurred three times.
    ThreefoldRepetition,
    /// Fifty moves by each side without a capture or pawn move.
    FiftyMoveRule,
}

impl GameStatus {
    /// Returns true for every terminal status.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    /// End-of-game message, or `None` while the game is in progress.
    pub fn message(&self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Checkmate { winner } => {
                Some(format!("Checkmate! {} wins.", winner))
            }
            GameStatus::Stalemate => Some("Draw by stalemate.".to_string()),
            GameStatus::InsufficientMaterial => {
                Some("Draw by insufficient material.".to_string())
            }
            GameStatus::ThreefoldRepetition => Some("Draw by threefold repetition.".to_string()),
            GameStatus::FiftyMoveRule => Some("Draw by the fifty-move rule.".to_string()),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(msg) => f.write_str(&msg),
            None => f.write_str("In progress"),
        }
    }
}
