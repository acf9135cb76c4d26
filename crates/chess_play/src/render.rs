//! Board drawing for the terminal.

use std::fmt::Write;

use chess_rules::{Move, Position, Square};

use crate::config::DisplayConfig;

/// Draw the board with rank and file labels, honouring `unicode` and `flip`.
///
/// Unflipped, rank 8 is on top and the a-file on the left; flipped, the board
/// is turned half a circle so black sits at the bottom.
pub fn render_board(pos: &Position, display: &DisplayConfig) -> String {
    let order: Vec<u8> = if display.flip {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };

    let mut s = String::with_capacity(256);
    for &row in &order {
        let _ = write!(s, "{} ", 8 - row);
        for &col in &order {
            let ch = match pos.piece_at(Square::new(row, col)) {
                Some(pc) if display.unicode => pc.glyph(),
                Some(pc) => pc.letter(),
                None => '.',
            };
            let _ = write!(s, " {ch}");
        }
        s.push('\n');
    }
    s.push_str("  ");
    for &col in &order {
        let _ = write!(s, " {}", Square::new(0, col).file_char());
    }
    s.push('\n');
    s
}

/// Space-separated coordinate list, e.g. for the `moves` command.
pub fn render_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_coordinate)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Numbered move history in notation, two plies per line.
pub fn render_history(log: &[Move]) -> String {
    let mut s = String::new();
    for (i, pair) in log.chunks(2).enumerate() {
        let _ = write!(s, "{}. {}", i + 1, pair[0]);
        if let Some(reply) = pair.get(1) {
            let _ = write!(s, "  {reply}");
        }
        s.push('\n');
    }
    s
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
