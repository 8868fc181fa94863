//! Board state controller.
//!
//! Single source of truth for the displayed position, the selection, the
//! history log and the orientation. Every public operation is total: bad
//! input leaves the state untouched and is reported as `false` at most.

use super::action::{LastMove, Move, MoveError};
use super::contracts::{ApplyMoveContract, Contract, assert_invariants};
use super::highlights::{HighlightStyle, derive_highlights};
use super::history::History;
use super::phases::{GameStatus, Selection};
use super::position::{FenError, Position};
use super::rules;
use super::types::{Color, Orientation, Square};
use crate::config::BoardConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Everything a rendering surface needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct RenderProps {
    /// Displayed position as FEN.
    pub fen: String,
    /// Square highlights.
    pub highlights: BTreeMap<Square, HighlightStyle>,
    /// Side at the bottom.
    pub orientation: Orientation,
    /// Board width in the surface's units.
    pub width: u32,
}

/// Owns the state of one board instance.
///
/// Instances share nothing; an analysis board and a demo board on the same
/// page are two independent controllers.
#[derive(Debug, Clone)]
pub struct BoardController {
    pub(crate) history: History,
    pub(crate) selection: Selection,
    pub(crate) last_move: Option<LastMove>,
    orientation: Orientation,
    config: BoardConfig,
}

impl BoardController {
    /// Creates a board at the standard starting position with default config.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Creates a board at the standard starting position.
    #[instrument(skip(config))]
    pub fn with_config(config: BoardConfig) -> Self {
        Self::from_position(Position::start(), config)
    }

    /// Creates a board whose history starts at an arbitrary position.
    ///
    /// `reset_board` still returns to the standard start.
    #[instrument(skip(config), fields(fen = %fen))]
    pub fn from_fen(fen: &str, config: BoardConfig) -> Result<Self, FenError> {
        let position = Position::from_fen(fen)?;
        Ok(Self::from_position(position, config))
    }

    fn from_position(position: Position, config: BoardConfig) -> Self {
        info!(fen = %position.fen(), "Creating board");
        Self {
            history: History::new(position),
            selection: Selection::Idle,
            last_move: None,
            orientation: *config.orientation(),
            config,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Attempts a move from the displayed position.
    ///
    /// On success the new position is appended (dropping any entries after
    /// the cursor), the cursor moves to the tip, the move becomes the last
    /// move and the selection is cleared. On failure nothing changes.
    #[instrument(skip(self), fields(candidate = %candidate, cursor = self.history.cursor()))]
    pub fn apply_move(&mut self, candidate: &Move) -> bool {
        match self.try_apply_move(candidate) {
            Ok(()) => true,
            Err(reason) => {
                debug!(%reason, "Move rejected");
                false
            }
        }
    }

    fn try_apply_move(&mut self, candidate: &Move) -> Result<(), MoveError> {
        ApplyMoveContract::pre(&self.history, candidate)?;
        let (next, record) =
            rules::play(self.history.current(), candidate, *self.config.auto_promotion())?;

        #[cfg(debug_assertions)]
        let before = self.history.clone();

        info!(san = %record.san, "Move applied");
        self.last_move = Some(record.mv.squares());
        self.history.push(next, record);
        self.selection = Selection::Idle;

        #[cfg(debug_assertions)]
        {
            let post = ApplyMoveContract::post(&before, &self.history);
            debug_assert!(post.is_ok(), "{:?}", post);
        }

        assert_invariants(self);
        Ok(())
    }

    /// Click on a square.
    ///
    /// Idle: a square holding a piece becomes selected, an empty one is
    /// ignored. Selected: clicking it again deselects; clicking another
    /// square attempts a move there and clears the selection either way.
    #[instrument(skip(self), fields(square = %square))]
    pub fn select_square(&mut self, square: Square) {
        match std::mem::take(&mut self.selection) {
            Selection::Idle => {
                if self.history.current().piece_at(square).is_none() {
                    debug!("{}", MoveError::NoPieceAtSquare(square));
                    return;
                }
                let destinations = rules::legal_destinations(self.history.current(), square);
                debug!(count = destinations.len(), "Square selected");
                self.selection = Selection::PieceSelected {
                    square,
                    destinations,
                };
            }
            Selection::PieceSelected { square: selected, .. } if selected == square => {
                debug!("Square deselected");
            }
            Selection::PieceSelected { square: selected, .. } => {
                let candidate = Move::with_promotion(selected, square, *self.config.auto_promotion());
                let moved = self.apply_move(&candidate);
                debug!(moved, "Click move attempted");
                self.selection = Selection::Idle;
            }
        }
        assert_invariants(self);
    }

    /// Returns to the standard starting position with a fresh history.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        info!("Resetting board");
        self.history.reset(Position::start());
        self.selection = Selection::Idle;
        self.last_move = None;
        assert_invariants(self);
    }

    /// Toggles which side is drawn at the bottom.
    #[instrument(skip(self), fields(orientation = ?self.orientation))]
    pub fn flip_orientation(&mut self) {
        self.orientation = self.orientation.flip();
        debug!(orientation = ?self.orientation, "Orientation flipped");
    }

    // ─────────────────────────────────────────────────────────────
    //  Rendering surface callbacks
    // ─────────────────────────────────────────────────────────────

    /// "Square clicked" callback.
    #[instrument(skip(self), fields(square = %square))]
    pub fn on_square_click(&mut self, square: Square) {
        self.select_square(square);
    }

    /// "Piece dropped" callback. Returns whether the drop was accepted;
    /// `false` tells the surface to snap the piece back.
    ///
    /// Drops bypass the selection but clear it like any other move attempt.
    #[instrument(skip(self), fields(from = %from, to = %to))]
    pub fn on_piece_drop(&mut self, from: Square, to: Square) -> bool {
        let candidate = Move::with_promotion(from, to, *self.config.auto_promotion());
        self.on_piece_drop_with(&candidate)
    }

    /// Drop with an explicit promotion choice (surfaces with a promotion picker).
    #[instrument(skip(self), fields(candidate = %candidate))]
    pub fn on_piece_drop_with(&mut self, candidate: &Move) -> bool {
        let accepted = self.apply_move(candidate);
        self.selection = Selection::Idle;
        assert_invariants(self);
        accepted
    }

    // ─────────────────────────────────────────────────────────────
    //  History navigation
    // ─────────────────────────────────────────────────────────────

    /// Shows the initial position. Returns whether the cursor moved.
    #[instrument(skip(self))]
    pub fn go_to_start(&mut self) -> bool {
        let moved = self.history.go_to_start();
        self.after_navigation();
        moved
    }

    /// Shows the previous position. No-op at the start.
    #[instrument(skip(self))]
    pub fn step_back(&mut self) -> bool {
        let moved = self.history.step_back();
        self.after_navigation();
        moved
    }

    /// Shows the next position. No-op at the tip.
    #[instrument(skip(self))]
    pub fn step_forward(&mut self) -> bool {
        let moved = self.history.step_forward();
        self.after_navigation();
        moved
    }

    /// Shows the latest position. Returns whether the cursor moved.
    #[instrument(skip(self))]
    pub fn go_to_end(&mut self) -> bool {
        let moved = self.history.go_to_end();
        self.after_navigation();
        moved
    }

    fn after_navigation(&mut self) {
        self.selection = Selection::Idle;
        self.last_move = if *self.config.highlight_on_navigation() {
            self.history
                .current_entry()
                .record
                .as_ref()
                .map(|r| r.mv.squares())
        } else {
            None
        };
        debug!(cursor = self.history.cursor(), "Navigated");
        assert_invariants(self);
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Displayed position.
    pub fn position(&self) -> &Position {
        self.history.current()
    }

    /// Displayed position as FEN.
    pub fn fen(&self) -> &str {
        self.history.current().fen()
    }

    /// Side to move in the displayed position.
    pub fn turn(&self) -> Color {
        self.history.current().turn()
    }

    /// The history log.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed position in the history.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Squares of the last move, if highlighted.
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Side drawn at the bottom.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Board configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Terminal state of the displayed position.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        rules::status(self.history.current(), self.history.repetitions())
    }

    /// End-of-game message for the displayed position, if any.
    pub fn status_message(&self) -> Option<String> {
        self.status().message()
    }

    /// SAN of every move in the log.
    pub fn san_moves(&self) -> Vec<&str> {
        self.history.san_moves()
    }

    /// Numbered movetext of the log (`1. e4 e5 2. Nf3`).
    pub fn pgn_movetext(&self) -> String {
        self.history.movetext()
    }

    /// Highlight map for the current state.
    pub fn highlights(&self) -> BTreeMap<Square, HighlightStyle> {
        derive_highlights(self.history.current(), &self.selection, self.last_move)
    }

    /// Snapshot for the rendering surface at the given viewport width.
    #[instrument(skip(self))]
    pub fn render_props(&self, viewport_width: u32) -> RenderProps {
        RenderProps::new(
            self.fen().to_string(),
            self.highlights(),
            self.orientation,
            self.config.responsive_width(viewport_width),
        )
    }
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new()
    }
}
