//! Interactive chessboard: board state, interaction, history and highlights.

mod action;
mod contracts;
mod controller;
mod highlights;
mod history;
mod interaction;
mod invariants;
mod phases;
mod position;
mod rules;
mod types;

pub use action::{LastMove, Move, MoveError, MoveRecord};
pub use contracts::{ApplyMoveContract, Contract};
pub use controller::{BoardController, RenderProps};
pub use highlights::{HighlightStyle, derive_highlights};
pub use history::{History, HistoryEntry};
pub use interaction::{BoardCommand, BoardEvent, DropResponse, EventError, PointerTracker, dispatch};
pub use invariants::{
    BoardInvariants, CursorInBounds, HistoryLinked, Invariant, InvariantSet, InvariantViolation,
    SelectionConsistent,
};
pub use phases::{GameStatus, Selection};
pub use position::{FenError, Position, START_FEN};
pub use rules::legal_destinations;
pub use types::{Color, Orientation, Piece, PieceKind, PromotionPiece, Square, SquareParseError};
