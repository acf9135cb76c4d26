//! Human-readable move text.
//!
//! Rendering is approximate algebraic notation built only from what a [`Move`]
//! recorded about the board when it was generated: no check or mate suffix,
//! no disambiguation. Parsing accepts coordinate text (`e2e4`, `e7e8q`) and
//! resolves it against a legal-move list so the special-move flags come out
//! right.

use std::fmt;

use crate::castling::CastleSide;
use crate::error::MoveParseError;
use crate::types::*;

/// Render `mv` as approximate algebraic notation.
///
/// Pawn moves show only their squares (`e2-e4`, `e4xd5`, `e5xd6 e.p.`,
/// `e7-e8=Q`), castling is `O-O` / `O-O-O`, and every other piece is prefixed
/// by its letter (`Ng1-f3`, `Bc4xf7`).
pub fn notation(mv: &Move) -> String {
    if mv.is_castling {
        return match CastleSide::of(mv) {
            CastleSide::KingSide => "O-O".to_string(),
            CastleSide::QueenSide => "O-O-O".to_string(),
        };
    }

    let sep = if mv.is_capture() { 'x' } else { '-' };
    let mut s = String::with_capacity(10);
    if mv.piece_moved.kind != PieceKind::Pawn {
        s.push(mv.piece_moved.kind.letter());
    }
    s.push_str(&format!("{}{sep}{}", mv.from, mv.to));

    if mv.is_en_passant {
        s.push_str(" e.p.");
    } else if mv.is_promotion {
        match mv.promoted_to {
            Some(kind) => {
                s.push('=');
                s.push(kind.letter());
            }
            None => s.push_str(" (promotion)"),
        }
    }
    s
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&notation(self))
    }
}

/// Resolve coordinate text against `legal`.
///
/// Returns the matching legal move together with the promotion piece named
/// in the text, if any. A promotion letter on a non-promoting move is an
/// error; a promoting move without one leaves the choice to the caller.
pub fn parse_coordinate_move(
    text: &str,
    legal: &[Move],
) -> Result<(Move, Option<PieceKind>), MoveParseError> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(MoveParseError::Malformed(text.to_string()));
    }
    let from: Square = text[0..2].parse()?;
    let to: Square = text[2..4].parse()?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_letter(ch) {
            Some(kind) if kind.is_promotion_choice() => Some(kind),
            _ => return Err(MoveParseError::BadPromotion(ch)),
        },
    };

    let mv = legal
        .iter()
        .find(|m| m.from == from && m.to == to)
        .copied()
        .ok_or_else(|| MoveParseError::Illegal(text.to_string()))?;

    if promotion.is_some() && !mv.is_promotion {
        return Err(MoveParseError::Illegal(text.to_string()));
    }
    Ok((mv, promotion))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
