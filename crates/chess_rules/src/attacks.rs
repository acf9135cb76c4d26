//! Ray-cast attack, check and pin detection.
//!
//! Everything here reads a [`Board`] and never mutates it. Hypothetical
//! questions ("would the king be safe on this square?") are answered by
//! treating one square as vacated, or by probing a copied board.

use tracing::debug;

use crate::board::Board;
use crate::types::*;

pub const ORTHOGONAL: [Dir; 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub const DIAGONAL: [Dir; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
/// Orthogonals first, then diagonals.
pub const ALL_DIRECTIONS: [Dir; 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
pub const KNIGHT_OFFSETS: [Dir; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Direction recorded for knight checks, which have no blockable axis.
pub const NO_AXIS: Dir = (0, 0);

/// A piece that may only move along `dir` (measured from its king) or back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub dir: Dir,
}

impl Pin {
    pub fn allows(&self, dir: Dir) -> bool {
        dir == self.dir || dir == (-self.dir.0, -self.dir.1)
    }
}

/// An enemy piece giving check, and the ray from the king it attacks along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub attacker: Square,
    pub dir: Dir,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckScan {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl CheckScan {
    pub fn pin_on(&self, sq: Square) -> Option<&Pin> {
        self.pins.iter().find(|p| p.square == sq)
    }
}

/// Can `piece`, found `distance` steps from the target along `dir`, hit it?
fn attacks_along(piece: Piece, dir: Dir, distance: i8) -> bool {
    let diagonal = dir.0 != 0 && dir.1 != 0;
    match piece.kind {
        PieceKind::Rook => !diagonal,
        PieceKind::Bishop => diagonal,
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        // The pawn sits one row "behind" the target from its own point of view.
        PieceKind::Pawn => distance == 1 && diagonal && dir.0 == -piece.color.pawn_dir(),
        PieceKind::Knight => false,
    }
}

fn occupant(board: &Board, sq: Square, vacated: Option<Square>) -> Option<Piece> {
    if vacated == Some(sq) { None } else { board[sq] }
}

/// Scan outwards from `king` for checks against, and pins on, side `ally`.
pub fn scan_pins_and_checks(board: &Board, king: Square, ally: Color) -> CheckScan {
    let mut scan = CheckScan::default();

    for dir in ALL_DIRECTIONS {
        let mut candidate: Option<Square> = None;
        for dist in 1..8 {
            let Some(sq) = king.offset(dir, dist) else {
                break;
            };
            let Some(piece) = board[sq] else {
                continue;
            };
            if piece.color == ally {
                if candidate.is_some() {
                    break;
                }
                candidate = Some(sq);
                continue;
            }
            if attacks_along(piece, dir, dist) {
                match candidate {
                    None => {
                        scan.in_check = true;
                        scan.checks.push(Check { attacker: sq, dir });
                    }
                    Some(pinned) => scan.pins.push(Pin {
                        square: pinned,
                        dir,
                    }),
                }
            }
            break;
        }
    }

    for jump in KNIGHT_OFFSETS {
        if let Some(sq) = king.offset(jump, 1)
            && let Some(piece) = board[sq]
            && piece.color != ally
            && piece.kind == PieceKind::Knight
        {
            scan.in_check = true;
            scan.checks.push(Check {
                attacker: sq,
                dir: NO_AXIS,
            });
        }
    }

    if scan.in_check {
        debug!(%king, ?ally, checks = scan.checks.len(), "king in check");
    }
    scan
}

fn attacked(board: &Board, target: Square, by: Color, vacated: Option<Square>) -> bool {
    for dir in ALL_DIRECTIONS {
        for dist in 1..8 {
            let Some(sq) = target.offset(dir, dist) else {
                break;
            };
            let Some(piece) = occupant(board, sq, vacated) else {
                continue;
            };
            if piece.color == by && attacks_along(piece, dir, dist) {
                return true;
            }
            break;
        }
    }

    KNIGHT_OFFSETS.iter().any(|&jump| {
        target
            .offset(jump, 1)
            .and_then(|sq| occupant(board, sq, vacated))
            .is_some_and(|p| p.color == by && p.kind == PieceKind::Knight)
    })
}

/// Is `target` attacked by any piece of color `by`?
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    attacked(board, target, by, None)
}

/// Like [`is_square_attacked`], but with `vacated` treated as empty.
///
/// Used to probe king steps: the king's origin must not shield the square it
/// steps to from a slider on the same ray.
pub fn is_attacked_if_vacated(board: &Board, target: Square, by: Color, vacated: Square) -> bool {
    attacked(board, target, by, Some(vacated))
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
