//! Square highlight derivation.
//!
//! Highlights are a pure function of the displayed position, the selection
//! and the last move. Callers recompute them on demand; nothing here is
//! cached or wired to state changes.

use super::action::LastMove;
use super::phases::Selection;
use super::position::Position;
use super::types::Square;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// Visual treatment of a highlighted square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HighlightStyle {
    /// Origin or destination of the last move.
    LastMove,
    /// The king of the side to move is in check.
    Check,
    /// The currently selected square.
    Selected,
    /// An empty square the selected piece can move to.
    LegalMove,
    /// An occupied square the selected piece can capture on.
    LegalCapture,
}

impl HighlightStyle {
    /// CSS background for web rendering surfaces.
    pub fn css_background(self) -> &'static str {
        match self {
            HighlightStyle::LastMove => "rgba(255, 255, 0, 0.4)",
            HighlightStyle::Check => {
                "radial-gradient(circle, rgba(255, 0, 0, 0.6) 40%, transparent 70%)"
            }
            HighlightStyle::Selected => "rgba(255, 255, 0, 0.6)",
            HighlightStyle::LegalMove => {
                "radial-gradient(circle, rgba(0, 0, 0, 0.1) 25%, transparent 25%)"
            }
            HighlightStyle::LegalCapture => {
                "radial-gradient(circle, rgba(0, 0, 0, 0.1) 85%, transparent 85%)"
            }
        }
    }
}

/// Builds the square → style map for the rendering surface.
///
/// Later layers win where squares overlap: last move, then check, then the
/// selected square, then its destinations.
#[instrument(skip(position, selection), fields(fen = %position.fen()))]
pub fn derive_highlights(
    position: &Position,
    selection: &Selection,
    last_move: Option<LastMove>,
) -> BTreeMap<Square, HighlightStyle> {
    let mut styles = BTreeMap::new();

    if let Some(last) = last_move {
        styles.insert(last.from, HighlightStyle::LastMove);
        styles.insert(last.to, HighlightStyle::LastMove);
    }

    if position.is_check()
        && let Some(king) = position.king_square(position.turn())
    {
        styles.insert(king, HighlightStyle::Check);
    }

    if let Selection::PieceSelected {
        square,
        destinations,
    } = selection
    {
        styles.insert(*square, HighlightStyle::Selected);
        for dest in destinations {
            let style = if position.piece_at(*dest).is_some() {
                HighlightStyle::LegalCapture
            } else {
                HighlightStyle::LegalMove
            };
            styles.insert(*dest, style);
        }
    }

    styles
}
