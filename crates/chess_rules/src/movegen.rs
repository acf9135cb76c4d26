use tracing::info;

use crate::attacks::*;
use crate::board::Position;
use crate::castling::gen_castle;
use crate::material::is_insufficient_material;
use crate::status::GameStatus;
use crate::types::*;

/// Generate all legal moves, returning a freshly allocated vector.
///
/// Refreshes the position's cached check/pin results and its status.
pub fn legal_moves(pos: &mut Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Order is deterministic: pieces in scan order (rows top to bottom, columns
/// left to right), each piece's directions in their fixed table order.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    let mover = pos.side_to_move;
    let king = pos.king_square(mover);
    let scan = scan_pins_and_checks(&pos.board, king, mover);

    match scan.checks.as_slice() {
        [] => pseudo_moves(pos, &scan.pins, out),
        [check] => {
            pseudo_moves(pos, &scan.pins, out);
            let resolving = resolving_squares(pos, king, check);
            out.retain(|mv| {
                mv.piece_moved.kind == PieceKind::King
                    || resolving.contains(&mv.to)
                    || (mv.is_en_passant && mv.en_passant_victim() == check.attacker)
            });
        }
        // No single block or capture answers a double check.
        _ => gen_king(pos, king, mover, out),
    }

    let status = if is_insufficient_material(&pos.board) {
        out.clear();
        GameStatus::InsufficientMaterial
    } else if out.is_empty() && scan.in_check {
        GameStatus::Checkmate {
            winner: mover.other(),
        }
    } else if out.is_empty() {
        GameStatus::Stalemate
    } else {
        GameStatus::Ongoing {
            in_check: scan.in_check,
        }
    };
    if status.is_over() && status != pos.status {
        info!(%status, ply = pos.move_log.len(), "game over");
    }

    pos.in_check = scan.in_check;
    pos.pins = scan.pins;
    pos.checks = scan.checks;
    pos.status = status;
}

/// Squares a non-king move may land on to answer a single check.
///
/// Knights and pawns can only be captured; a slider can also be blocked
/// anywhere on the ray between it and the king.
fn resolving_squares(pos: &Position, king: Square, check: &Check) -> Vec<Square> {
    let attacker = pos.board[check.attacker];
    if check.dir == NO_AXIS || attacker.is_some_and(|p| p.kind == PieceKind::Pawn) {
        return vec![check.attacker];
    }
    let mut squares = Vec::with_capacity(7);
    for dist in 1..8 {
        let Some(sq) = king.offset(check.dir, dist) else {
            break;
        };
        squares.push(sq);
        if sq == check.attacker {
            break;
        }
    }
    squares
}

fn pseudo_moves(pos: &Position, pins: &[Pin], out: &mut Vec<Move>) {
    for (sq, pc) in pos.board.pieces() {
        if pc.color != pos.side_to_move {
            continue;
        }
        let pin = pins.iter().find(|p| p.square == sq);
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, sq, pc.color, pin, out),
            PieceKind::Knight => gen_knight(pos, sq, pc.color, pin, out),
            PieceKind::Bishop => gen_slider(pos, sq, pc.color, pin, &DIAGONAL, out),
            PieceKind::Rook => gen_slider(pos, sq, pc.color, pin, &ORTHOGONAL, out),
            PieceKind::Queen => gen_slider(pos, sq, pc.color, pin, &ALL_DIRECTIONS, out),
            PieceKind::King => gen_king(pos, sq, pc.color, out),
        }
    }
}

fn may_move(pin: Option<&Pin>, dir: Dir) -> bool {
    pin.is_none_or(|p| p.allows(dir))
}

fn gen_pawn(pos: &Position, from: Square, c: Color, pin: Option<&Pin>, out: &mut Vec<Move>) {
    let board = &pos.board;
    let dir = c.pawn_dir();

    let push = (dir, 0);
    if may_move(pin, push)
        && let Some(to) = from.offset(push, 1)
        && board[to].is_none()
    {
        let mv = Move::new(board, from, to);
        out.push(if to.row == c.promotion_row() {
            mv.promotion()
        } else {
            mv
        });

        if from.row == c.pawn_start_row()
            && let Some(to2) = from.offset(push, 2)
            && board[to2].is_none()
        {
            out.push(Move::new(board, from, to2));
        }
    }

    for side in [-1, 1] {
        let diag = (dir, side);
        if !may_move(pin, diag) {
            continue;
        }
        let Some(to) = from.offset(diag, 1) else {
            continue;
        };
        match board[to] {
            Some(target) if target.color != c => {
                let mv = Move::new(board, from, to);
                out.push(if to.row == c.promotion_row() {
                    mv.promotion()
                } else {
                    mv
                });
            }
            None if pos.en_passant == Some(to) => {
                let mv = Move::new(board, from, to).en_passant();
                if en_passant_keeps_king_safe(pos, &mv) {
                    out.push(mv);
                }
            }
            _ => {}
        }
    }
}

/// An en-passant capture empties two squares at once, which the pin scan
/// cannot see (both pawns on the king's rank, for one). Probe a copy.
fn en_passant_keeps_king_safe(pos: &Position, mv: &Move) -> bool {
    let mover = mv.piece_moved.color;
    let mut probe = pos.board;
    probe[mv.from] = None;
    probe[mv.en_passant_victim()] = None;
    probe[mv.to] = Some(mv.piece_moved);
    !is_square_attacked(&probe, pos.king_square(mover), mover.other())
}

fn gen_knight(pos: &Position, from: Square, c: Color, pin: Option<&Pin>, out: &mut Vec<Move>) {
    // No knight jump stays on a ray, so a pinned knight is frozen.
    if pin.is_some() {
        return;
    }
    for jump in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(jump, 1)
            && pos.board[to].is_none_or(|pc| pc.color != c)
        {
            out.push(Move::new(&pos.board, from, to));
        }
    }
}

fn gen_slider(
    pos: &Position,
    from: Square,
    c: Color,
    pin: Option<&Pin>,
    dirs: &[Dir],
    out: &mut Vec<Move>,
) {
    for &dir in dirs {
        if !may_move(pin, dir) {
            continue;
        }
        for dist in 1..8 {
            let Some(to) = from.offset(dir, dist) else {
                break;
            };
            match pos.board[to] {
                None => out.push(Move::new(&pos.board, from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(&pos.board, from, to));
                    break;
                }
                _ => break,
            }
        }
    }
}

/// King steps that do not walk into an attack, followed by castling.
fn gen_king(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    for dir in ALL_DIRECTIONS {
        let Some(to) = from.offset(dir, 1) else {
            continue;
        };
        if pos.board[to].is_some_and(|pc| pc.color == c) {
            continue;
        }
        if !is_attacked_if_vacated(&pos.board, to, c.other(), from) {
            out.push(Move::new(&pos.board, from, to));
        }
    }
    gen_castle(pos, from, c, out);
}

impl Position {
    /// Legal moves for the side to move; see [`legal_moves`].
    pub fn legal_moves(&mut self) -> Vec<Move> {
        legal_moves(self)
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
