//! chess_play CLI
//!
//! Play in the terminal, count perft nodes, or run random self-play games.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use chess_play::{run, run_selfplay, PlayConfig};
use chess_rules::{perft, perft_divide, Position};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chess_play", version, about)]
struct Cli {
    /// Config file (defaults to ./chess_play.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset, e.g. "debug" or "chess_rules=trace"
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play interactively on stdin (the default).
    Play {
        /// Draw pieces as Unicode glyphs.
        #[arg(long)]
        unicode: bool,

        /// Draw the board from black's side.
        #[arg(long)]
        flip: bool,

        /// List legal moves after every ply.
        #[arg(long)]
        show_moves: bool,
    },

    /// Count leaf nodes from the start position.
    Perft {
        #[arg(short, long, default_value_t = 4)]
        depth: u8,

        /// Print the count below each root move.
        #[arg(long)]
        divide: bool,
    },

    /// Play random legal games and tally the results.
    Selfplay {
        #[arg(short, long)]
        games: Option<u32>,

        #[arg(long)]
        max_plies: Option<u32>,

        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_perft(depth: u8, divide: bool) {
    let mut pos = Position::startpos();
    let start = Instant::now();

    let nodes = if divide {
        let split = perft_divide(&mut pos, depth);
        for (mv, count) in &split {
            println!("{}: {count}", mv.to_coordinate());
        }
        println!();
        split.iter().map(|(_, count)| count).sum()
    } else {
        perft(&mut pos, depth)
    };

    let elapsed = start.elapsed();
    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };
    println!("Depth: {depth}");
    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = PlayConfig::resolve(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    init_tracing(&config.log_level);

    let command = cli.command.unwrap_or(Command::Play {
        unicode: false,
        flip: false,
        show_moves: false,
    });

    match command {
        Command::Play {
            unicode,
            flip,
            show_moves,
        } => {
            config.display.unicode |= unicode;
            config.display.flip |= flip;
            config.display.show_legal_moves |= show_moves;

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let pos = run(stdin.lock(), &mut stdout, config)?;
            info!(plies = pos.move_log().len(), status = %pos.status(), "session ended");
        }
        Command::Perft { depth, divide } => run_perft(depth, divide),
        Command::Selfplay {
            games,
            max_plies,
            seed,
            json,
        } => {
            let mut settings = config.selfplay;
            settings.games = games.unwrap_or(settings.games);
            settings.max_plies = max_plies.unwrap_or(settings.max_plies);
            let base_seed = seed.or(settings.seed).unwrap_or_else(rand::random);

            let summary = run_selfplay(&settings, base_seed)?;
            if json {
                let text =
                    serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
                println!("{text}");
            } else {
                println!("=== Self-play: {} games, seed {base_seed} ===", summary.total());
                for game in &summary.games {
                    println!(
                        "seed {:>20}: {:>7} after {:>3} plies",
                        game.seed, game.result, game.plies
                    );
                }
                println!();
                println!(
                    "White wins: {}, Black wins: {}, Draws: {}, Unfinished: {}",
                    summary.white_wins, summary.black_wins, summary.draws, summary.unfinished
                );
            }
        }
    }
    Ok(())
}
