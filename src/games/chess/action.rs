//! First-class action types for the chessboard.
//!
//! A move is the user's intent, not a side effect. It is built from a click
//! pair or a drop and only becomes a real transition once the rules engine
//! accepts it against a specific position.

use super::types::{PromotionPiece, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A candidate move: `{from, to, promotion?}`.
///
/// Valid only relative to a specific position. `promotion` is consulted
/// only when the move actually promotes a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Origin square.
    pub from: Square,
    /// Destination square. For castling this is the king's destination (g1, c8, ...).
    pub to: Square,
    /// Promotion piece, if the caller picked one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PromotionPiece>,
}

impl Move {
    /// Creates a move without a promotion choice.
    #[instrument]
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a move with an explicit promotion piece.
    #[instrument]
    pub fn with_promotion(from: Square, to: Square, promotion: PromotionPiece) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// The `{from, to}` pair used for last-move highlighting.
    pub fn squares(&self) -> LastMove {
        LastMove {
            from: self.from,
            to: self.to,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(p) = self.promotion {
            let c = match p {
                PromotionPiece::Queen => 'q',
                PromotionPiece::Rook => 'r',
                PromotionPiece::Bishop => 'b',
                PromotionPiece::Knight => 'n',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// The two squares of the most recent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastMove {
    /// Square the piece left.
    pub from: Square,
    /// Square the piece arrived on.
    pub to: Square,
}

/// A move the rules engine accepted, with the metadata it reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move as requested, with the promotion actually applied (if any).
    pub mv: Move,
    /// Standard algebraic notation, including `+`/`#` suffixes.
    pub san: String,
    /// True if a piece was captured.
    pub capture: bool,
    /// True if the move gives check.
    pub check: bool,
}

/// Why a candidate move was rejected.
///
/// Never surfaced to the user; the board simply does not move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// There is no piece on the origin square.
    #[display("No piece on {}", _0)]
    NoPieceAtSquare(Square),

    /// The piece on the origin square belongs to the side not to move.
    #[display("Piece on {} does not belong to the side to move", _0)]
    WrongTurn(Square),

    /// The piece cannot legally reach the destination.
    #[display("Illegal move {}", _0)]
    IllegalMove(Move),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_move_display_is_uci() {
        assert_eq!(Move::new(sq("e2"), sq("e4")).to_string(), "e2e4");
        assert_eq!(
            Move::with_promotion(sq("a7"), sq("a8"), PromotionPiece::Knight).to_string(),
            "a7a8n"
        );
    }

    #[test]
    fn test_move_serde_omits_missing_promotion() {
        let json = serde_json::to_string(&Move::new(sq("g1"), sq("f3"))).unwrap();
        assert_eq!(json, r#"{"from":"g1","to":"f3"}"#);
        let back: Move = serde_json::from_str(r#"{"from":"b7","to":"b8","promotion":"rook"}"#).unwrap();
        assert_eq!(back.promotion, Some(PromotionPiece::Rook));
    }
}
