//! Randomised playouts checking the invariants every legal game must keep.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use chess_rules::{
    Color, PieceKind, Position, is_square_attacked, legal_moves, scan_pins_and_checks,
};

const GAMES: u64 = 40;
const MAX_PLIES: usize = 200;

fn assert_consistent(pos: &Position) {
    for color in [Color::White, Color::Black] {
        let king = pos.king_square(color);
        assert_eq!(
            pos.piece_at(king).map(|p| (p.color, p.kind)),
            Some((color, PieceKind::King)),
            "king cache out of date for {color}"
        );
    }
    assert_eq!(pos.castling_log().len(), pos.move_log().len() + 1);
    assert_eq!(pos.castling_log().last().copied(), Some(pos.castling_rights()));
}

#[test]
fn random_games_never_leave_king_in_check() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pos = Position::startpos();
        let mut snapshots = vec![pos.clone()];

        for _ in 0..MAX_PLIES {
            let moves = legal_moves(&mut pos);
            let Some(&mv) = moves.choose(&mut rng) else {
                assert!(pos.status().is_over());
                break;
            };
            let mover = pos.side_to_move();
            let promotion = mv.is_promotion.then(|| {
                [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight]
                    [rng.gen_range(0..4)]
            });

            pos.apply(mv, promotion);
            assert!(
                !is_square_attacked(pos.board(), pos.king_square(mover), mover.other()),
                "seed {seed}: {mv} left the {mover} king attacked"
            );
            assert_eq!(pos.side_to_move(), mover.other());
            assert_consistent(&pos);
            snapshots.push(pos.clone());
        }

        // Unwind the whole game and compare every intermediate position.
        while pos.undo().is_some() {
            snapshots.pop();
            let expected = snapshots.last().unwrap();
            assert_eq!(&pos, expected, "seed {seed}: undo did not restore position");
            assert_consistent(&pos);
        }
        assert_eq!(pos, Position::startpos());
    }
}

#[test]
fn cached_scan_matches_fresh_scan() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut pos = Position::startpos();
    for _ in 0..MAX_PLIES {
        let moves = legal_moves(&mut pos);
        let side = pos.side_to_move();
        let fresh = scan_pins_and_checks(pos.board(), pos.king_square(side), side);
        assert_eq!(pos.in_check(), fresh.in_check);
        assert_eq!(pos.pins(), fresh.pins.as_slice());
        assert_eq!(pos.checks(), fresh.checks.as_slice());

        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        pos.apply(mv, None);
    }
}

#[test]
fn legal_moves_are_unique_and_repeatable() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut pos = Position::startpos();
    for _ in 0..MAX_PLIES {
        let first = legal_moves(&mut pos);
        let second = legal_moves(&mut pos);
        assert_eq!(first, second);

        let mut ids: Vec<u16> = first.iter().map(|m| m.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), first.len(), "duplicate move generated");

        let Some(&mv) = first.choose(&mut rng) else {
            break;
        };
        pos.apply(mv, None);
    }
}
