use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::attacks::{Check, Pin};
use crate::castling::{CastleSide, CastlingRights};
use crate::error::SetupError;
use crate::status::GameStatus;
use crate::types::*;

/// 8x8 grid of piece tokens, indexed by [`Square`]. `None` marks an empty square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Board {
    pub const EMPTY: Board = Board([[None; 8]; 8]);

    pub fn startpos() -> Self {
        let mut board = Board::EMPTY;
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as u8;
            board[Square::new(0, col)] = Some(Piece::new(Color::Black, kind));
            board[Square::new(1, col)] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board[Square::new(6, col)] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board[Square::new(7, col)] = Some(Piece::new(Color::White, kind));
        }
        board
    }

    /// Occupied squares in scan order (rows top to bottom, columns left to right).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self[sq].map(|pc| (sq, pc)))
    }

    fn find_kings(&self, color: Color) -> Vec<Square> {
        self.pieces()
            .filter(|(_, pc)| *pc == Piece::new(color, PieceKind::King))
            .map(|(sq, _)| sq)
            .collect()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.row as usize][sq.col as usize]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.0[sq.row as usize][sq.col as usize]
    }
}

/// A game in progress: the board plus everything needed to generate legal
/// moves and to undo exactly.
///
/// The castling-rights log and the en-passant log each hold one entry per
/// position in the game, so both are always one longer than the move log.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    /// King location per color, indexed by [`Color::idx`].
    pub(crate) kings: [Square; 2],
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) move_log: Vec<Move>,
    pub(crate) castling_log: Vec<CastlingRights>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    // Refreshed every time legal moves are generated.
    pub(crate) in_check: bool,
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
    pub(crate) status: GameStatus,
}

impl Position {
    pub fn startpos() -> Self {
        Self::with_board(Board::startpos(), Color::White, CastlingRights::ALL)
            .expect("starting layout has one king per side")
    }

    /// Set up a position from eight rows of eight characters, rank 8 first.
    ///
    /// Pieces use FEN letters and `.` marks an empty square; whitespace
    /// inside a row is ignored and blank lines are skipped. Castling rights
    /// are granted wherever a king and rook still stand on their home squares.
    ///
    /// ```
    /// use chess_rules::{Color, Position};
    ///
    /// let pos = Position::from_diagram(
    ///     "
    ///     ......k.
    ///     ......P.
    ///     ......K.
    ///     ........
    ///     ........
    ///     ........
    ///     ........
    ///     ........
    ///     ",
    ///     Color::Black,
    /// )
    /// .unwrap();
    /// assert_eq!(pos.side_to_move(), Color::Black);
    /// ```
    pub fn from_diagram(diagram: &str, side_to_move: Color) -> Result<Self, SetupError> {
        let rows: Vec<String> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(SetupError::RowCount(rows.len()));
        }

        let mut board = Board::EMPTY;
        for (row, text) in rows.iter().enumerate() {
            let len = text.chars().count();
            if len != 8 {
                return Err(SetupError::RowLength { row, len });
            }
            for (col, ch) in text.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = Piece::from_letter(ch).ok_or(SetupError::UnknownPiece(ch))?;
                board[Square::new(row as u8, col as u8)] = Some(piece);
            }
        }

        let rights = CastlingRights::from_home_squares(&board);
        Self::with_board(board, side_to_move, rights)
    }

    fn with_board(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
    ) -> Result<Self, SetupError> {
        let mut kings = [Square::new(0, 0); 2];
        for color in [Color::White, Color::Black] {
            match board.find_kings(color).as_slice() {
                [sq] => kings[color.idx()] = *sq,
                found => {
                    return Err(SetupError::KingCount {
                        color,
                        found: found.len(),
                    });
                }
            }
        }
        Ok(Position {
            board,
            side_to_move,
            kings,
            castling,
            en_passant: None,
            move_log: Vec::new(),
            castling_log: vec![castling],
            en_passant_log: vec![None],
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            status: GameStatus::Ongoing { in_check: false },
        })
    }

    /// Replace the castling rights of a freshly set-up position.
    ///
    /// Resets the rights log to the single new entry, so only call this
    /// before any move has been applied.
    pub fn with_castling_rights(mut self, rights: CastlingRights) -> Self {
        debug_assert!(self.move_log.is_empty(), "rights can only be seeded before play");
        self.castling = rights;
        self.castling_log = vec![rights];
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn king_square(&self, c: Color) -> Square {
        self.kings[c.idx()]
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn castling_log(&self) -> &[CastlingRights] {
        &self.castling_log
    }

    /// Check flag from the most recent legal-move generation.
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Status from the most recent legal-move generation.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(self.status, GameStatus::Checkmate { .. })
    }

    pub fn is_stalemate(&self) -> bool {
        self.status == GameStatus::Stalemate
    }

    /// Commit `mv`, which must come from the latest legal-move list.
    ///
    /// `promotion` picks the piece a promoting pawn becomes; it is ignored
    /// for other moves and defaults to a queen.
    pub fn apply(&mut self, mv: Move, promotion: Option<PieceKind>) {
        let mover = mv.piece_moved;
        debug_assert_eq!(mover.color, self.side_to_move, "{mv:?} moves the wrong side");
        debug_assert_eq!(self.board[mv.from], Some(mover), "{mv:?} does not match the board");
        debug_assert!(
            promotion.is_none_or(|k| k.is_promotion_choice()),
            "cannot promote to {promotion:?}"
        );

        let mut logged = mv;
        self.board[mv.from] = None;
        self.board[mv.to] = Some(mover);

        if mover.kind == PieceKind::King {
            self.kings[mover.color.idx()] = mv.to;
        }

        self.en_passant = if mv.is_double_pawn_push() {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.to.col))
        } else {
            None
        };

        if mv.is_en_passant {
            self.board[mv.en_passant_victim()] = None;
        }

        if mv.is_promotion {
            let kind = promotion
                .filter(|k| k.is_promotion_choice())
                .unwrap_or(PieceKind::Queen);
            self.board[mv.to] = Some(Piece::new(mover.color, kind));
            logged.promoted_to = Some(kind);
        }

        if mv.is_castling {
            let (home, target) = CastleSide::of(&mv).rook_squares(mv.to.row);
            let rook = self.board[home].take();
            self.board[target] = rook;
        }

        self.castling.update_after(&mv);
        self.castling_log.push(self.castling);
        self.en_passant_log.push(self.en_passant);
        self.move_log.push(logged);
        self.side_to_move = self.side_to_move.other();

        trace!(ply = self.move_log.len(), mv = %logged, "applied");
    }

    /// Take back the most recent move, returning it. No-op on an empty log.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;

        self.board[mv.from] = Some(mv.piece_moved);
        self.board[mv.to] = mv.piece_captured;
        self.side_to_move = self.side_to_move.other();

        if mv.piece_moved.kind == PieceKind::King {
            self.kings[mv.piece_moved.color.idx()] = mv.from;
        }

        self.en_passant_log.pop();
        self.en_passant = self.en_passant_log.last().copied().flatten();
        if mv.is_en_passant {
            self.board[mv.to] = None;
            self.board[mv.en_passant_victim()] = mv.piece_captured;
            // The capture window reopens on the square just vacated.
            debug_assert_eq!(self.en_passant, Some(mv.to));
            self.en_passant = Some(mv.to);
        }

        self.castling_log.pop();
        self.castling = *self
            .castling_log
            .last()
            .expect("castling log keeps the initial rights");

        if mv.is_castling {
            let (home, target) = CastleSide::of(&mv).rook_squares(mv.to.row);
            let rook = self.board[target].take();
            self.board[home] = rook;
        }

        trace!(ply = self.move_log.len(), mv = %mv, "undone");
        Some(mv)
    }
}

impl PartialEq for Position {
    /// Structural equality of the playable state: board, side to move, king
    /// locations, castling rights and en-passant target. Logs and cached scan
    /// results are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.kings == other.kings
            && self.castling == other.castling
            && self.en_passant == other.en_passant
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let ch = self.board[Square::new(row, col)].map_or('.', Piece::letter);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move, castling {}", self.side_to_move, self.castling)?;
        if let Some(ep) = self.en_passant {
            write!(f, ", en passant {ep}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
