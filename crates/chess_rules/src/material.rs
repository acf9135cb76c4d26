//! Insufficient-material draw classifier.

use crate::board::Board;
use crate::types::*;

/// True when the non-king material left on `board` can never deliver mate.
///
/// Drawn material: nothing at all; a lone knight or bishop; bishops of a
/// single side all standing on one square color; bishops only, with both
/// sides owning at least one; knights only, all belonging to one side.
pub fn is_insufficient_material(board: &Board) -> bool {
    let pieces: Vec<(Square, Piece)> = board
        .pieces()
        .filter(|(_, pc)| pc.kind != PieceKind::King)
        .collect();

    match pieces.as_slice() {
        [] => true,
        [(_, lone)] => matches!(lone.kind, PieceKind::Knight | PieceKind::Bishop),
        [(_, first), ..] => {
            let one_side = pieces.iter().all(|(_, pc)| pc.color == first.color);
            let all_of = |kind: PieceKind| pieces.iter().all(|(_, pc)| pc.kind == kind);

            if all_of(PieceKind::Bishop) {
                if !one_side {
                    return true;
                }
                let parity = pieces[0].0.parity();
                pieces.iter().all(|(sq, _)| sq.parity() == parity)
            } else {
                all_of(PieceKind::Knight) && one_side
            }
        }
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod material_tests;
