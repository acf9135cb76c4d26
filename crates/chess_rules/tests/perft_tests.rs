use std::time::Instant;

use rayon::prelude::*;

use chess_rules::{Color, Position, perft, perft_divide};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 1_000_000;

struct Case {
    name: &'static str,
    diagram: &'static str,
    side: Color,
    depths: &'static [(u8, u64)],
}

// Only depths without promotions at the leaves: a promotion counts once here,
// not once per piece choice.
const CASES: &[Case] = &[
    Case {
        name: "start",
        diagram: "
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        ",
        side: Color::White,
        depths: &[(1, 20), (2, 400), (3, 8_902), (4, 197_281), (5, 4_865_609)],
    },
    Case {
        name: "kiwipete",
        diagram: "
            r...k..r
            p.ppqpb.
            bn..pnp.
            ...PN...
            .p..P...
            ..N..Q.p
            PPPBBPPP
            R...K..R
        ",
        side: Color::White,
        depths: &[(1, 48), (2, 2_039), (3, 97_862)],
    },
    Case {
        name: "rook endgame",
        diagram: "
            ........
            ..p.....
            ...p....
            KP.....r
            .R...p.k
            ........
            ....P.P.
            ........
        ",
        side: Color::White,
        depths: &[(1, 14), (2, 191), (3, 2_812), (4, 43_238), (5, 674_624)],
    },
];

#[test]
fn perft_known_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().for_each(|case| {
        let mut ran_depths = Vec::new();
        let mut total_nodes: u64 = 0;
        let case_start = Instant::now();

        for &(depth, expected) in case.depths {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {depth} for {} (expected {expected} nodes), set {FULL_PERFT_ENV}=1 to run all.",
                    case.name
                );
                continue;
            }
            let mut pos = Position::from_diagram(case.diagram, case.side).unwrap();
            let got = perft(&mut pos, depth);
            assert!(
                got == expected,
                "Perft mismatch for {} at depth {depth}: expected {expected}, got {got}",
                case.name
            );

            ran_depths.push(depth);
            total_nodes += got;
        }

        let case_elapsed = case_start.elapsed();
        if !ran_depths.is_empty() {
            println!(
                "{} done: depths {:?}, total nodes {}, elapsed {:.3?}",
                case.name, ran_depths, total_nodes, case_elapsed
            );
        }
    });
}

#[test]
fn perft_split_over_root_moves_in_parallel() {
    let mut root = Position::startpos();
    let moves = root.legal_moves();

    let total: u64 = moves
        .par_iter()
        .map(|&mv| {
            let mut pos = root.clone();
            pos.apply(mv, None);
            perft(&mut pos, 3)
        })
        .sum();
    assert_eq!(total, 197_281);
}

#[test]
fn perft_leaves_position_untouched() {
    let mut pos = Position::startpos();
    perft(&mut pos, 3);
    assert_eq!(pos, Position::startpos());
    assert!(pos.move_log().is_empty());
    assert_eq!(pos.castling_log().len(), 1);
}

#[test]
fn perft_divide_sums_to_perft() {
    let mut pos = Position::from_diagram(CASES[1].diagram, Color::White).unwrap();
    let split = perft_divide(&mut pos, 2);
    assert_eq!(split.len(), 48);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 2_039);

    let total = perft(&mut pos, 2);
    assert_eq!(total, 2_039);
}

#[test]
fn perft_depth_zero_is_one() {
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 0), 1);
    assert!(perft_divide(&mut pos, 0).is_empty());
}
