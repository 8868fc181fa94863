//! Core domain types for the chessboard.
//!
//! These are the board's own vocabulary. The rules engine has its own
//! square and piece types; conversions live here so nothing above the
//! `rules` adapter needs to know which engine is in use.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side of the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "title_case")]
pub enum Color {
    /// White (moves first).
    White,
    /// Black.
    Black,
}

impl Color {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl From<shakmaty::Color> for Color {
    fn from(c: shakmaty::Color) -> Self {
        match c {
            shakmaty::Color::White => Self::White,
            shakmaty::Color::Black => Self::Black,
        }
    }
}

impl From<Color> for shakmaty::Color {
    fn from(c: Color) -> Self {
        match c {
            Color::White => Self::White,
            Color::Black => Self::Black,
        }
    }
}

/// Kind of chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// Pawn.
    Pawn,
    /// Knight.
    Knight,
    /// Bishop.
    Bishop,
    /// Rook.
    Rook,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl From<shakmaty::Role> for PieceKind {
    fn from(r: shakmaty::Role) -> Self {
        match r {
            shakmaty::Role::Pawn => Self::Pawn,
            shakmaty::Role::Knight => Self::Knight,
            shakmaty::Role::Bishop => Self::Bishop,
            shakmaty::Role::Rook => Self::Rook,
            shakmaty::Role::Queen => Self::Queen,
            shakmaty::Role::King => Self::King,
        }
    }
}

/// A piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Owner of the piece.
    pub color: Color,
    /// What the piece is.
    pub kind: PieceKind,
}

impl Piece {
    /// FEN letter for this piece (uppercase for white).
    pub fn fen_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl From<shakmaty::Piece> for Piece {
    fn from(p: shakmaty::Piece) -> Self {
        Self {
            color: p.color.into(),
            kind: p.role.into(),
        }
    }
}

/// Piece a pawn may promote to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PromotionPiece {
    /// Queen (used for every interactive promotion unless configured otherwise).
    #[default]
    Queen,
    /// Rook.
    Rook,
    /// Bishop.
    Bishop,
    /// Knight.
    Knight,
}

impl From<PromotionPiece> for shakmaty::Role {
    fn from(p: PromotionPiece) -> Self {
        match p {
            PromotionPiece::Queen => Self::Queen,
            PromotionPiece::Rook => Self::Rook,
            PromotionPiece::Bishop => Self::Bishop,
            PromotionPiece::Knight => Self::Knight,
        }
    }
}

/// Which side is drawn at the bottom of the board.
///
/// Rendering only; never consulted by game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// White at the bottom.
    #[default]
    White,
    /// Black at the bottom.
    Black,
}

impl Orientation {
    /// Returns the opposite orientation.
    #[instrument]
    pub fn flip(self) -> Self {
        match self {
            Orientation::White => Orientation::Black,
            Orientation::Black => Orientation::White,
        }
    }

    /// Color rendered at the bottom edge.
    pub fn bottom(self) -> Color {
        match self {
            Orientation::White => Color::White,
            Orientation::Black => Color::Black,
        }
    }
}

/// Error parsing a square name such as `e4`.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SquareParseError {
    /// Input was not two characters long.
    #[display("Square name must be two characters, got {:?}", _0)]
    Length(String),
    /// File letter outside `a..=h`.
    #[display("Invalid file {:?}", _0)]
    File(char),
    /// Rank digit outside `1..=8`.
    #[display("Invalid rank {:?}", _0)]
    Rank(char),
}

impl std::error::Error for SquareParseError {}

/// One of the 64 board coordinates.
///
/// Indexed `rank * 8 + file` with a1 = 0 and h8 = 63. Serializes as its
/// algebraic name so it can key JSON highlight maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    /// Creates a square from file (0-7, a-h) and rank (0-7, 1-8).
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self(rank * 8 + file))
        } else {
            None
        }
    }

    /// Creates a square from its index (0-63).
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 { Some(Self(index)) } else { None }
    }

    /// Index 0-63.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// File 0-7 (a-h).
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Rank 0-7 (1-8).
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// True for dark squares (a1 is dark).
    pub const fn is_dark(self) -> bool {
        (self.file() + self.rank()) % 2 == 0
    }

    /// All 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareParseError::Length(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) {
            return Err(SquareParseError::File(file as char));
        }
        if !(b'1'..=b'8').contains(&rank) {
            return Err(SquareParseError::Rank(rank as char));
        }
        Ok(Self((rank - b'1') * 8 + (file - b'a')))
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_string()
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{file}{rank}")
    }
}

impl From<shakmaty::Square> for Square {
    fn from(s: shakmaty::Square) -> Self {
        Self(s as u8)
    }
}

impl From<Square> for shakmaty::Square {
    fn from(s: Square) -> Self {
        // Always < 64 by construction.
        Self::new(u32::from(s.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display_is_capitalized() {
        assert_eq!(Color::White.to_string(), "White");
        assert_eq!(format!("{} to move", Color::Black), "Black to move");
        assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"black\"");
    }

    #[test]
    fn test_square_parse_and_display() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!(sq.file(), 4);
        assert_eq!(sq.rank(), 3);
        assert_eq!(sq.to_string(), "e4");
        assert_eq!("A1".parse::<Square>().unwrap().index(), 0);
        assert_eq!("h8".parse::<Square>().unwrap().index(), 63);
    }

    #[test]
    fn test_square_parse_errors() {
        assert!(matches!("e".parse::<Square>(), Err(SquareParseError::Length(_))));
        assert!(matches!("i1".parse::<Square>(), Err(SquareParseError::File('i'))));
        assert!(matches!("a9".parse::<Square>(), Err(SquareParseError::Rank('9'))));
        assert!(matches!("e44".parse::<Square>(), Err(SquareParseError::Length(_))));
    }

    #[test]
    fn test_square_matches_engine_indexing() {
        for sq in Square::all() {
            let engine: shakmaty::Square = sq.into();
            assert_eq!(Square::from(engine), sq);
            assert_eq!(engine.to_string(), sq.to_string());
        }
    }

    #[test]
    fn test_square_serializes_as_name() {
        let sq: Square = "g7".parse().unwrap();
        assert_eq!(serde_json::to_string(&sq).unwrap(), "\"g7\"");
        let back: Square = serde_json::from_str("\"g7\"").unwrap();
        assert_eq!(back, sq);
        assert!(serde_json::from_str::<Square>("\"z9\"").is_err());
    }

    #[test]
    fn test_orientation_flip() {
        assert_eq!(Orientation::White.flip(), Orientation::Black);
        assert_eq!(Orientation::White.flip().flip(), Orientation::White);
        assert_eq!(Orientation::Black.bottom(), Color::Black);
    }

    #[test]
    fn test_dark_squares() {
        assert!("a1".parse::<Square>().unwrap().is_dark());
        assert!(!"h1".parse::<Square>().unwrap().is_dark());
        assert!("h8".parse::<Square>().unwrap().is_dark());
    }
}
