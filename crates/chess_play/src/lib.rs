//! Terminal driver for the `chess_rules` engine.
//!
//! All rule decisions come from the engine; this crate only reads input,
//! draws boards and tallies results.

pub mod config;
pub mod play;
pub mod render;
pub mod selfplay;

pub use config::{DisplayConfig, GameConfig, PlayConfig, SelfplayConfig};
pub use play::{run, PlayCommand, Session};
pub use render::{render_board, render_history, render_moves};
pub use selfplay::{play_random_game, run_selfplay, GameRecord, SelfplaySummary};
