//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_rules -- [depth]
//!
//! Examples:
//!   # Default: depth 4 over every test position
//!   cargo flamegraph --example perft_bench -p chess_rules
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p chess_rules -- 5

use chess_rules::{Color, Position, perft};
use std::env;
use std::time::Instant;

/// Standard test positions for comprehensive profiling
const TEST_POSITIONS: &[(&str, &str, Color)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/......../......../......../......../PPPPPPPP/RNBQKBNR",
        Color::White,
    ),
    (
        "Kiwipete",
        "r...k..r/p.ppqpb./bn..pnp./...PN.../.p..P.../..N..Q.p/PPPBBPPP/R...K..R",
        Color::White,
    ),
    (
        "Position 3",
        "......../..p...../...p..../KP.....r/.R...p.k/......../....P.P./........",
        Color::White,
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for &(name, rows, side) in TEST_POSITIONS {
        let diagram = rows.replace('/', "\n");
        let mut pos = match Position::from_diagram(&diagram, side) {
            Ok(pos) => pos,
            Err(err) => {
                eprintln!("{name}: {err}");
                continue;
            }
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&mut pos, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
