//! Adapter over the rules engine.
//!
//! Legality, resulting positions, SAN and terminal-state detection all come
//! from `shakmaty`. This module only translates between the board's
//! vocabulary (`Square`, `Move`) and the engine's, so the controller never
//! touches engine types.

use super::action::{Move, MoveError, MoveRecord};
use super::phases::GameStatus;
use super::position::Position;
use super::types::{PromotionPiece, Square};
use shakmaty::san::SanPlus;
use shakmaty::{Chess, Position as _, Role};
use tracing::{debug, instrument};

/// Origin and destination of an engine move as a user would enter them.
///
/// Castling is entered as the king's two-square move (e1g1), while the
/// engine encodes it as king-takes-rook. Drops do not exist in standard chess.
fn user_squares(m: &shakmaty::Move) -> Option<(Square, Square)> {
    match m {
        shakmaty::Move::Normal { from, to, .. } => Some(((*from).into(), (*to).into())),
        shakmaty::Move::EnPassant { from, to } => Some(((*from).into(), (*to).into())),
        shakmaty::Move::Castle { king, rook } => {
            let king: Square = (*king).into();
            let rook: Square = (*rook).into();
            let file = if rook.file() > king.file() { 6 } else { 2 };
            Square::new(file, king.rank()).map(|dest| (king, dest))
        }
        shakmaty::Move::Put { .. } => None,
    }
}

/// Legal destination squares for the piece on `from`.
///
/// Empty if the square is empty or holds a piece of the side not to move.
/// Promotion variants collapse into one destination.
#[instrument(skip(position), fields(fen = %position.fen()))]
pub fn legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    let mut destinations: Vec<Square> = position
        .chess()
        .legal_moves()
        .iter()
        .filter_map(user_squares)
        .filter(|(origin, _)| *origin == from)
        .map(|(_, dest)| dest)
        .collect();
    destinations.sort();
    destinations.dedup();
    debug!(count = destinations.len(), "Legal destinations computed");
    destinations
}

/// Finds the engine move matching a candidate.
///
/// A promotion move matches only the requested piece, falling back to
/// `auto_promotion` when the candidate names none.
#[instrument(skip(position), fields(fen = %position.fen(), candidate = %candidate))]
fn resolve(
    position: &Position,
    candidate: &Move,
    auto_promotion: PromotionPiece,
) -> Result<shakmaty::Move, MoveError> {
    let piece = position
        .piece_at(candidate.from)
        .ok_or(MoveError::NoPieceAtSquare(candidate.from))?;
    if piece.color != position.turn() {
        return Err(MoveError::WrongTurn(candidate.from));
    }

    let wanted: Role = candidate.promotion.unwrap_or(auto_promotion).into();
    position
        .chess()
        .legal_moves()
        .into_iter()
        .find(|m| {
            user_squares(m) == Some((candidate.from, candidate.to))
                && m.promotion().is_none_or(|role| role == wanted)
        })
        .ok_or(MoveError::IllegalMove(*candidate))
}

/// Plays a candidate move, returning the new position and what happened.
///
/// The input position is untouched; on error nothing is produced.
#[instrument(skip(position), fields(fen = %position.fen(), candidate = %candidate))]
pub fn play(
    position: &Position,
    candidate: &Move,
    auto_promotion: PromotionPiece,
) -> Result<(Position, MoveRecord), MoveError> {
    let engine_move = resolve(position, candidate, auto_promotion)?;

    let capture = engine_move.is_capture();
    let promotion = engine_move.promotion().map(|_| candidate.promotion.unwrap_or(auto_promotion));

    // Legal by construction: `resolve` only returns moves from the legal move list.
    let mut next: Chess = position.chess().clone();
    let san = SanPlus::from_move_and_play_unchecked(&mut next, &engine_move).to_string();
    let check = next.is_check();

    let record = MoveRecord {
        mv: Move {
            from: candidate.from,
            to: candidate.to,
            promotion,
        },
        san,
        capture,
        check,
    };
    debug!(san = %record.san, capture, check, "Move played");
    Ok((Position::from_chess(next), record))
}

/// Terminal state of `position`.
///
/// `repetitions` is how many times the position's repetition key has
/// occurred in the line leading to it, itself included.
#[instrument(skip(position), fields(fen = %position.fen()))]
pub fn status(position: &Position, repetitions: usize) -> GameStatus {
    let chess = position.chess();
    if chess.is_checkmate() {
        GameStatus::Checkmate {
            winner: position.turn().opponent(),
        }
    } else if chess.is_stalemate() {
        GameStatus::Stalemate
    } else if chess.is_insufficient_material() {
        GameStatus::InsufficientMaterial
    } else if repetitions >= 3 {
        GameStatus::ThreefoldRepetition
    } else if position.halfmove_clock() >= 100 {
        GameStatus::FiftyMoveRule
    } else {
        GameStatus::InProgress
    }
}
