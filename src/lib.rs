//! Strictly Chess library - an interactive chessboard engine
//!
//! This library owns the state behind an interactive chessboard: the
//! displayed position, piece selection, a navigable move history and the
//! square highlights a rendering surface should draw. Move legality comes
//! from the `shakmaty` rules engine; this crate never re-implements chess.
//!
//! # Architecture
//!
//! - **Controller**: [`BoardController`], single source of truth per board
//! - **Interaction**: click-click and drag-drop events translated into [`BoardCommand`]s
//! - **History**: [`History`] with a review cursor and branch-on-edit
//! - **Highlights**: [`derive_highlights`], a pure function of board state
//!
//! # Example
//!
//! ```
//! use strictly_chess::{BoardController, Square};
//!
//! let mut board = BoardController::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//!
//! board.on_square_click(e2);
//! board.on_square_click(e4);
//! assert_eq!(board.san_moves(), vec!["e4"]);
//!
//! board.step_back();
//! assert_eq!(board.cursor(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{BoardConfig, ConfigError};

// Crate-level exports - Board controller and rendering contract
pub use games::chess::{BoardController, RenderProps};

// Crate-level exports - Interaction surface
pub use games::chess::{BoardCommand, BoardEvent, DropResponse, EventError, PointerTracker, dispatch};

// Crate-level exports - History
pub use games::chess::{History, HistoryEntry};

// Crate-level exports - Highlights
pub use games::chess::{HighlightStyle, derive_highlights};

// Crate-level exports - Moves and status
pub use games::chess::{GameStatus, LastMove, Move, MoveError, MoveRecord, Selection};

// Crate-level exports - Positions and board vocabulary
pub use games::chess::{
    Color, FenError, Orientation, Piece, PieceKind, Position, PromotionPiece, START_FEN, Square,
    SquareParseError, legal_destinations,
};

// Crate-level exports - Invariants and contracts
pub use games::chess::{
    ApplyMoveContract, BoardInvariants, Contract, CursorInBounds, HistoryLinked, Invariant,
    InvariantSet, InvariantViolation, SelectionConsistent,
};
