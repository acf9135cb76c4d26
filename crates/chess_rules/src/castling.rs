//! Castling rights bookkeeping and castling move generation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attacks::is_square_attacked;
use crate::board::Position;
use crate::types::*;

/// Column the king starts on for both sides.
pub const KING_HOME_COL: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on, next to the castled king.
    pub fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Side of a castling move, read from the king's direction of travel.
    pub fn of(mv: &Move) -> CastleSide {
        if mv.to.col > mv.from.col {
            CastleSide::KingSide
        } else {
            CastleSide::QueenSide
        }
    }

    /// (home, target) squares of the rook for a castle on `row`.
    pub fn rook_squares(self, row: u8) -> (Square, Square) {
        (
            Square::new(row, self.rook_home_col()),
            Square::new(row, self.rook_target_col()),
        )
    }

    fn from_rook_col(col: u8) -> Option<CastleSide> {
        match col {
            7 => Some(CastleSide::KingSide),
            0 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

/// Four independent castling flags. Once cleared, a flag only comes back
/// through undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn get(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.wk,
            (Color::White, CastleSide::QueenSide) => self.wq,
            (Color::Black, CastleSide::KingSide) => self.bk,
            (Color::Black, CastleSide::QueenSide) => self.bq,
        }
    }

    pub fn clear(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.wk = false,
            (Color::White, CastleSide::QueenSide) => self.wq = false,
            (Color::Black, CastleSide::KingSide) => self.bk = false,
            (Color::Black, CastleSide::QueenSide) => self.bq = false,
        }
    }

    /// Rights after `mv` has been played.
    ///
    /// A king move clears both of its side's rights, a rook leaving its home
    /// corner clears that corner's right, and capturing a rook on its home
    /// corner clears the victim's right for that corner.
    pub fn update_after(&mut self, mv: &Move) {
        let mover = mv.piece_moved;
        match mover.kind {
            PieceKind::King => {
                self.clear(mover.color, CastleSide::KingSide);
                self.clear(mover.color, CastleSide::QueenSide);
            }
            PieceKind::Rook if mv.from.row == mover.color.home_row() => {
                if let Some(side) = CastleSide::from_rook_col(mv.from.col) {
                    self.clear(mover.color, side);
                }
            }
            _ => {}
        }

        if let Some(victim) = mv.piece_captured
            && victim.kind == PieceKind::Rook
            && mv.to.row == victim.color.home_row()
            && let Some(side) = CastleSide::from_rook_col(mv.to.col)
        {
            self.clear(victim.color, side);
        }
    }

    /// Rights implied by kings and rooks standing on their home squares.
    pub fn from_home_squares(board: &crate::board::Board) -> CastlingRights {
        let mut rights = CastlingRights::NONE;
        for color in [Color::White, Color::Black] {
            let row = color.home_row();
            if board[Square::new(row, KING_HOME_COL)] != Some(Piece::new(color, PieceKind::King)) {
                continue;
            }
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                let (rook_home, _) = side.rook_squares(row);
                if board[rook_home] == Some(Piece::new(color, PieceKind::Rook)) {
                    match (color, side) {
                        (Color::White, CastleSide::KingSide) => rights.wk = true,
                        (Color::White, CastleSide::QueenSide) => rights.wq = true,
                        (Color::Black, CastleSide::KingSide) => rights.bk = true,
                        (Color::Black, CastleSide::QueenSide) => rights.bq = true,
                    }
                }
            }
        }
        rights
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::ALL
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == CastlingRights::NONE {
            return f.write_str("-");
        }
        for (flag, ch) in [(self.wk, 'K'), (self.wq, 'Q'), (self.bk, 'k'), (self.bq, 'q')] {
            if flag {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Append the castling moves available to the king of color `c` on `from`.
///
/// The king's own square is re-scanned here rather than trusting any cached
/// check flag: no castling out of check. King-side needs both transit squares
/// empty and safe. Queen-side needs all three squares up to the rook empty,
/// but only the two the king crosses must be safe.
pub(crate) fn gen_castle(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    let row = c.home_row();
    if from != Square::new(row, KING_HOME_COL) {
        return;
    }
    let enemy = c.other();
    let board = pos.board();
    if is_square_attacked(board, from, enemy) {
        return;
    }

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if !pos.castling_rights().get(c, side) {
            continue;
        }
        let (rook_home, _) = side.rook_squares(row);
        if board[rook_home] != Some(Piece::new(c, PieceKind::Rook)) {
            continue;
        }

        let (between, crossed): (&[u8], [u8; 2]) = match side {
            CastleSide::KingSide => (&[5, 6], [5, 6]),
            CastleSide::QueenSide => (&[3, 2, 1], [3, 2]),
        };
        if between.iter().any(|&col| board[Square::new(row, col)].is_some()) {
            continue;
        }
        if crossed
            .iter()
            .any(|&col| is_square_attacked(board, Square::new(row, col), enemy))
        {
            continue;
        }

        let to = match side {
            CastleSide::KingSide => Square::new(row, KING_HOME_COL + 2),
            CastleSide::QueenSide => Square::new(row, KING_HOME_COL - 2),
        };
        out.push(Move::new(board, from, to).castling());
    }
}

#[cfg(test)]
#[path = "castling_tests.rs"]
mod castling_tests;
