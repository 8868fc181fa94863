//! Immutable position snapshots.

use super::types::{Color, Piece, Square};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Position as _};
use tracing::{debug, instrument};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Error building a position from a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FenError {
    /// The text is not syntactically valid FEN.
    #[display("Invalid FEN syntax: {}", _0)]
    Syntax(String),
    /// The FEN parses but describes an illegal position.
    #[display("Illegal position: {}", _0)]
    Illegal(String),
}

impl std::error::Error for FenError {}

/// A serialized board snapshot: placement, side to move, castling rights,
/// en-passant target and move counters.
///
/// Immutable once produced. Every move derives a new `Position`. Construction
/// goes through the rules engine, so a `Position` is always legal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    chess: Chess,
    fen: String,
}

impl Position {
    /// The standard starting position.
    #[instrument]
    pub fn start() -> Self {
        Self::from_chess(Chess::default())
    }

    /// Parses and validates a FEN string.
    #[instrument(fields(fen = %fen))]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed: Fen = fen
            .trim()
            .parse()
            .map_err(|e| FenError::Syntax(format!("{}", e)))?;
        let chess: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| FenError::Illegal(format!("{}", e)))?;
        debug!("FEN accepted");
        Ok(Self::from_chess(chess))
    }

    pub(crate) fn from_chess(chess: Chess) -> Self {
        let fen = Fen::from_setup(chess.clone().into_setup(EnPassantMode::Legal)).to_string();
        Self { chess, fen }
    }

    pub(crate) fn chess(&self) -> &Chess {
        &self.chess
    }

    /// The position as a FEN string.
    pub fn fen(&self) -> &str {
        &self.fen
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.chess.turn().into()
    }

    /// Piece standing on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.chess.board().piece_at(square.into()).map(Piece::from)
    }

    /// All occupied squares with their pieces, a1 to h8.
    pub fn pieces(&self) -> Vec<(Square, Piece)> {
        Square::all()
            .filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
            .collect()
    }

    /// True if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.chess.is_check()
    }

    /// Square of `color`'s king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.chess.board().king_of(color.into()).map(Square::from)
    }

    /// Half-moves since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u32 {
        self.chess.halfmoves()
    }

    /// Full-move number (starts at 1, increments after Black moves).
    pub fn fullmove_number(&self) -> u32 {
        self.chess.fullmoves().get()
    }

    /// Placement, side to move, castling rights and en-passant target.
    ///
    /// Two positions with the same key count as a repetition.
    pub fn repetition_key(&self) -> &str {
        let end = self
            .fen
            .match_indices(' ')
            .nth(3)
            .map(|(i, _)| i)
            .unwrap_or(self.fen.len());
        &self.fen[..end]
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.fen == other.fen
    }
}

impl Eq for Position {}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.fen)
    }
}

impl TryFrom<String> for Position {
    type Error = FenError;

    fn try_from(fen: String) -> Result<Self, Self::Error> {
        Self::from_fen(&fen)
    }
}

impl From<Position> for String {
    fn from(pos: Position) -> Self {
        pos.fen
    }
}
