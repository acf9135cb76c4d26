//! Random self-play: whole games of uniformly chosen legal moves.
//!
//! Each game is unwound ply by ply afterwards and must land back on the
//! starting position, which makes this a cheap end-to-end check of
//! apply/undo on long, irregular games.

use anyhow::ensure;
use chess_rules::{Color, GameStatus, PieceKind, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SelfplayConfig;

const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// One finished (or abandoned) game
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub seed: u64,
    pub plies: usize,
    /// `None` when the ply limit was reached first
    pub status: Option<GameStatus>,
    pub result: String,
    pub moves: Vec<String>,
}

/// Tally over a batch of games
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelfplaySummary {
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub unfinished: u32,
    pub games: Vec<GameRecord>,
}

impl SelfplaySummary {
    fn record(&mut self, game: GameRecord) {
        match game.status {
            Some(GameStatus::Checkmate {
                winner: Color::White,
            }) => self.white_wins += 1,
            Some(GameStatus::Checkmate {
                winner: Color::Black,
            }) => self.black_wins += 1,
            Some(_) => self.draws += 1,
            None => self.unfinished += 1,
        }
        self.games.push(game);
    }

    pub fn total(&self) -> u32 {
        self.white_wins + self.black_wins + self.draws + self.unfinished
    }
}

/// Play one random game from the start position and verify it unwinds.
pub fn play_random_game(seed: u64, max_plies: u32) -> anyhow::Result<GameRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::startpos();
    let mut status = None;

    for _ in 0..max_plies {
        let legal = pos.legal_moves();
        let Some(&mv) = legal.choose(&mut rng) else {
            status = Some(pos.status());
            break;
        };
        let promotion = if mv.is_promotion {
            PROMOTION_CHOICES.choose(&mut rng).copied()
        } else {
            None
        };
        pos.apply(mv, promotion);
        debug!(seed, ply = pos.move_log().len(), mv = %mv, "selfplay move");
    }
    // The limit may be hit exactly on a terminal position.
    if status.is_none() {
        pos.legal_moves();
        if pos.status().is_over() {
            status = Some(pos.status());
        }
    }

    let plies = pos.move_log().len();
    let moves = pos.move_log().iter().map(|m| m.to_coordinate()).collect();
    let result = status.and_then(GameStatus::result).unwrap_or("*").to_string();

    while pos.undo().is_some() {}
    ensure!(
        pos == Position::startpos(),
        "seed {seed}: undoing {plies} plies did not restore the start position"
    );
    ensure!(
        pos.castling_log().len() == 1,
        "seed {seed}: castling log holds {} entries after full undo",
        pos.castling_log().len()
    );

    info!(seed, plies, %result, "selfplay game finished");
    Ok(GameRecord {
        seed,
        plies,
        status,
        result,
        moves,
    })
}

/// Play `config.games` games with seeds `base_seed`, `base_seed + 1`, ...
pub fn run_selfplay(config: &SelfplayConfig, base_seed: u64) -> anyhow::Result<SelfplaySummary> {
    let mut summary = SelfplaySummary::default();
    for i in 0..config.games {
        let seed = base_seed.wrapping_add(u64::from(i));
        summary.record(play_random_game(seed, config.max_plies)?);
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "selfplay_tests.rs"]
mod selfplay_tests;
