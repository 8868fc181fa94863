//! Interaction surface: turning raw surface events into board commands.
//!
//! Rendering surfaces speak in loosely typed payloads (JSON from a web
//! board, button presses from a terminal). Everything is translated into a
//! [`BoardCommand`] at this boundary; the controller never sees raw input.

use super::action::Move;
use super::controller::BoardController;
use super::types::{Square, SquareParseError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Raw event payload emitted by a web rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BoardEvent {
    /// A square was clicked.
    SquareClick {
        /// Algebraic square name.
        square: String,
    },
    /// A dragged piece was released over a square.
    PieceDrop {
        /// Square the drag started on.
        #[serde(rename = "sourceSquare")]
        source_square: String,
        /// Square the piece was released on.
        #[serde(rename = "targetSquare")]
        target_square: String,
        /// Piece code such as `wP`, if the surface reports it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        piece: Option<String>,
    },
}

impl BoardEvent {
    /// Parses an event from its JSON payload.
    #[instrument(skip(payload))]
    pub fn from_json(payload: &str) -> Result<Self, EventError> {
        serde_json::from_str(payload).map_err(|e| EventError::Json(e.to_string()))
    }
}

/// Why a raw event could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EventError {
    /// Payload is not a recognised event.
    #[display("Malformed event payload: {}", _0)]
    Json(String),

    /// A square name in the payload did not parse.
    #[display("Bad square in event: {}", _0)]
    Square(SquareParseError),

    /// Piece code is not of the form `wP`, `bN`, ...
    #[display("Bad piece code {:?}", _0)]
    Piece(String),
}

impl std::error::Error for EventError {}

impl From<SquareParseError> for EventError {
    fn from(e: SquareParseError) -> Self {
        Self::Square(e)
    }
}

/// A strongly typed user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardCommand {
    /// Click on a square.
    Select(Square),
    /// Drop a piece; promotion falls back to the configured piece.
    Drop(Move),
}

fn valid_piece_code(code: &str) -> bool {
    let mut chars = code.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('w' | 'b'), Some('P' | 'N' | 'B' | 'R' | 'Q' | 'K'), None)
    )
}

impl TryFrom<BoardEvent> for BoardCommand {
    type Error = EventError;

    #[instrument]
    fn try_from(event: BoardEvent) -> Result<Self, Self::Error> {
        match event {
            BoardEvent::SquareClick { square } => Ok(Self::Select(square.parse()?)),
            BoardEvent::PieceDrop {
                source_square,
                target_square,
                piece,
            } => {
                if let Some(code) = piece
                    && !valid_piece_code(&code)
                {
                    return Err(EventError::Piece(code));
                }
                Ok(Self::Drop(Move::new(
                    source_square.parse()?,
                    target_square.parse()?,
                )))
            }
        }
    }
}

/// Answer to the surface after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "camelCase")]
pub enum DropResponse {
    /// Keep the piece where it was dropped (or nothing to undo).
    Accepted,
    /// Return the dragged piece to its origin square.
    Snapback,
}

impl From<bool> for DropResponse {
    fn from(accepted: bool) -> Self {
        if accepted { Self::Accepted } else { Self::Snapback }
    }
}

/// Routes a command to the controller.
///
/// Clicks never snap anything back, so they always answer `Accepted`.
#[instrument(skip(board))]
pub fn dispatch(board: &mut BoardController, command: BoardCommand) -> DropResponse {
    match command {
        BoardCommand::Select(square) => {
            board.on_square_click(square);
            DropResponse::Accepted
        }
        BoardCommand::Drop(mv) => {
            let accepted = match mv.promotion {
                None => board.on_piece_drop(mv.from, mv.to),
                Some(_) => board.on_piece_drop_with(&mv),
            };
            let response = DropResponse::from(accepted);
            debug!(%response, "Drop answered");
            response
        }
    }
}

/// Pointer press/release state machine for surfaces reporting raw buttons.
///
/// Press on a piece and release elsewhere is a drop. Any other completed
/// press is a click on the pressed square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTracker {
    pressed: Option<(Square, bool)>,
}

impl PointerTracker {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press on `square`; `has_piece` tells whether it can be dragged.
    #[instrument(skip(self))]
    pub fn press(&mut self, square: Square, has_piece: bool) {
        self.pressed = Some((square, has_piece));
    }

    /// Completes a press. `None` means the pointer left the board, which
    /// cancels the gesture.
    #[instrument(skip(self))]
    pub fn release(&mut self, square: Option<Square>) -> Option<BoardCommand> {
        let (origin, has_piece) = self.pressed.take()?;
        let target = square?;
        if has_piece && target != origin {
            Some(BoardCommand::Drop(Move::new(origin, target)))
        } else {
            Some(BoardCommand::Select(origin))
        }
    }

    /// Square of a piece currently being dragged.
    pub fn dragging(&self) -> Option<Square> {
        match self.pressed {
            Some((square, true)) => Some(square),
            _ => None,
        }
    }

    /// Abandons any press in progress.
    pub fn cancel(&mut self) {
        self.pressed = None;
    }
}
