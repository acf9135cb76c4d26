//! Errors raised at the engine's input boundary.
//!
//! Rule violations inside the engine (applying a move that was never offered,
//! for instance) are caller bugs and are caught by debug assertions instead.

use thiserror::Error;

use crate::types::Color;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("square ({row}, {col}) is off the board")]
    OutOfRange { row: i8, col: i8 },
    #[error("invalid square notation: {0:?}")]
    Malformed(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("board diagram has {0} rows, expected 8")]
    RowCount(usize),
    #[error("row {row} of the board diagram has {len} squares, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("unknown piece letter {0:?}")]
    UnknownPiece(char),
    #[error("expected exactly one {color} king, found {found}")]
    KingCount { color: Color, found: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("move text {0:?} is not of the form e2e4 or e7e8q")]
    Malformed(String),
    #[error(transparent)]
    Square(#[from] SquareError),
    #[error("{0:?} is not a promotion piece (use q, r, b or n)")]
    BadPromotion(char),
    #[error("{0} is not a legal move in this position")]
    Illegal(String),
}
