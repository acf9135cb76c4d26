use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::SquareError;

/// A ray or jump offset as (row delta, column delta).
pub type Dir = (i8, i8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Row delta of a single pawn advance. White moves towards row 0.
    pub fn pawn_dir(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row holding this side's king and rooks in the starting layout.
    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Case-insensitive inverse of [`PieceKind::letter`].
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Kinds a pawn may promote to.
    pub fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN-style letter: uppercase for white, lowercase for black.
    pub fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }

    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

/// A board coordinate. Row 0 is rank 8 (black's back rank), column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    pub fn try_new(row: i8, col: i8) -> Result<Self, SquareError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(SquareError::OutOfRange { row, col })
        }
    }

    /// Step `n` times along `dir`, or `None` when that leaves the board.
    pub fn offset(self, dir: Dir, n: i8) -> Option<Square> {
        let row = self.row as i8 + dir.0 * n;
        let col = self.col as i8 + dir.1 * n;
        Square::try_new(row, col).ok()
    }

    /// All 64 squares, rows top to bottom, columns left to right.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }

    /// Squares of equal parity share a color on the board.
    pub fn parity(self) -> u8 {
        (self.row + self.col) % 2
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(SquareError::Malformed(s.to_string()));
        }
        let (f, r) = (b[0].to_ascii_lowercase(), b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(SquareError::Malformed(s.to_string()));
        }
        Ok(Square::new(b'8' - r, f - b'a'))
    }
}

/// A single ply.
///
/// Carries the tokens that stood on its origin and destination when it was
/// built, so the move log alone is enough to undo it or render it. Two moves
/// compare equal (and hash equal) whenever their four coordinates match;
/// the piece tokens, flags and promotion choice do not take part.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    /// For en passant this is the bypassed pawn, which does not stand on `to`.
    pub piece_captured: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castling: bool,
    /// Kind actually chosen; only set on the copy kept in the move log.
    pub promoted_to: Option<PieceKind>,
}

impl Move {
    /// Build a plain move from the current board contents.
    ///
    /// The origin must hold a piece; generators never call this otherwise.
    pub fn new(board: &Board, from: Square, to: Square) -> Self {
        let piece_moved = board[from].expect("move origin must hold a piece");
        Self {
            from,
            to,
            piece_moved,
            piece_captured: board[to],
            is_promotion: false,
            is_en_passant: false,
            is_castling: false,
            promoted_to: None,
        }
    }

    pub fn promotion(mut self) -> Self {
        self.is_promotion = true;
        self
    }

    pub fn en_passant(mut self) -> Self {
        self.is_en_passant = true;
        self.piece_captured = Some(Piece::new(self.piece_moved.color.other(), PieceKind::Pawn));
        self
    }

    pub fn castling(mut self) -> Self {
        self.is_castling = true;
        self
    }

    /// Deterministic identity in `0..=7777`, one decimal digit per coordinate.
    pub fn id(&self) -> u16 {
        self.from.row as u16 * 1000
            + self.from.col as u16 * 100
            + self.to.row as u16 * 10
            + self.to.col as u16
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.from.row.abs_diff(self.to.row) == 2
    }

    /// Square of the pawn removed by an en-passant capture.
    pub fn en_passant_victim(&self) -> Square {
        Square::new(self.from.row, self.to.col)
    }

    /// Coordinate text such as `e2e4` or `e7e8q`.
    pub fn to_coordinate(&self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(kind) = self.promoted_to {
            s.push(kind.letter().to_ascii_lowercase());
        }
        s
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
