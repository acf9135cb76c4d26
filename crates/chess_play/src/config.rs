//! Driver configuration, read from an optional TOML file.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chess_rules::PieceKind;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "chess_play.toml";

/// Complete driver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Filter used when `RUST_LOG` is unset
    pub log_level: String,
    pub display: DisplayConfig,
    pub game: GameConfig,
    pub selfplay: SelfplayConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Unicode glyphs instead of FEN letters
    pub unicode: bool,
    /// List the legal moves after every ply
    pub show_legal_moves: bool,
    /// Draw the board from black's side
    pub flip: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Piece letter used when a promotion move is typed without one
    pub default_promotion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfplayConfig {
    /// Plies after which an unfinished game is abandoned
    pub max_plies: u32,
    pub games: u32,
    /// Base seed; game `i` uses `seed + i`. Drawn from the OS when unset.
    pub seed: Option<u64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            display: DisplayConfig::default(),
            game: GameConfig::default(),
            selfplay: SelfplayConfig::default(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_promotion: "q".to_string(),
        }
    }
}

impl Default for SelfplayConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            games: 10,
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Parse a config from TOML text
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text).context("invalid config file")?;
        config.promotion_kind()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("failed to load {}", path.display()))
    }

    /// Config from `explicit` if given, else from the default file if it
    /// exists, else the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// The configured default promotion as a piece kind.
    pub fn promotion_kind(&self) -> anyhow::Result<PieceKind> {
        let mut chars = self.game.default_promotion.chars();
        match (chars.next().and_then(PieceKind::from_letter), chars.next()) {
            (Some(kind), None) if kind.is_promotion_choice() => Ok(kind),
            _ => bail!(
                "default_promotion must be one of q, r, b, n (got {:?})",
                self.game.default_promotion
            ),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
