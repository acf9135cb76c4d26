use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Outcome of the latest legal-move generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing { in_check: bool },
    Checkmate { winner: Color },
    Stalemate,
    /// Neither side has mating material; takes precedence over move counts.
    InsufficientMaterial,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }

    /// Result tag for a finished game, `None` while play continues.
    pub fn result(self) -> Option<&'static str> {
        match self {
            GameStatus::Ongoing { .. } => None,
            GameStatus::Checkmate {
                winner: Color::White,
            } => Some("1-0"),
            GameStatus::Checkmate {
                winner: Color::Black,
            } => Some("0-1"),
            GameStatus::Stalemate | GameStatus::InsufficientMaterial => Some("1/2-1/2"),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing { in_check: false } => f.write_str("in progress"),
            GameStatus::Ongoing { in_check: true } => f.write_str("check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
            GameStatus::InsufficientMaterial => f.write_str("draw by insufficient material"),
        }
    }
}
