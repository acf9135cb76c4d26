//! Chess position and legality engine.
//!
//! Given a position and its history, the engine produces the complete legal
//! move list, applies and exactly reverses moves, and classifies terminal
//! states (checkmate, stalemate, insufficient material). It does not search
//! or evaluate.
//!
//! A driver loops: ask for [`legal_moves`], pick one, [`Position::apply`] it,
//! ask again. [`Position::undo`] takes back the latest ply.
//!
//! ```
//! use chess_rules::{new_game, parse_coordinate_move};
//!
//! let mut pos = new_game();
//! let legal = pos.legal_moves();
//! assert_eq!(legal.len(), 20);
//!
//! let (mv, promotion) = parse_coordinate_move("e2e4", &legal).unwrap();
//! pos.apply(mv, promotion);
//! assert_eq!(pos.move_log().last().unwrap().to_string(), "e2-e4");
//! ```

pub mod attacks;
pub mod board;
pub mod castling;
pub mod error;
pub mod material;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod status;
pub mod types;

// Re-export the driver-facing API
pub use attacks::{Check, CheckScan, Pin, is_square_attacked, scan_pins_and_checks};
pub use board::*;
pub use castling::{CastleSide, CastlingRights};
pub use error::*;
pub use material::is_insufficient_material;
pub use movegen::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use status::GameStatus;
pub use types::*;

/// A fresh game: standard layout, white to move, all castling rights.
pub fn new_game() -> Position {
    Position::startpos()
}
