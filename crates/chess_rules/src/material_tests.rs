use super::*;
use crate::board::Position;

/// Kings on e8/e1 plus the given extra pieces, as (square, letter).
fn board_with(extra: &[(&str, char)]) -> Board {
    let mut board = *Position::from_diagram(
        "
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        ....K...
        ",
        Color::White,
    )
    .unwrap()
    .board();
    for &(sq, letter) in extra {
        board[sq.parse::<Square>().unwrap()] = Piece::from_letter(letter);
    }
    board
}

#[test]
fn test_bare_kings() {
    assert!(is_insufficient_material(&board_with(&[])));
}

#[test]
fn test_single_minor_piece() {
    assert!(is_insufficient_material(&board_with(&[("c3", 'N')])));
    assert!(is_insufficient_material(&board_with(&[("c3", 'b')])));
    assert!(!is_insufficient_material(&board_with(&[("c3", 'R')])));
    assert!(!is_insufficient_material(&board_with(&[("c3", 'q')])));
    assert!(!is_insufficient_material(&board_with(&[("c3", 'P')])));
}

#[test]
fn test_same_side_bishops_depend_on_square_color() {
    // c1 and f4 are both dark squares.
    assert!(is_insufficient_material(&board_with(&[("c1", 'B'), ("f4", 'B')])));
    // c1 and f1 differ.
    assert!(!is_insufficient_material(&board_with(&[("c1", 'B'), ("f1", 'B')])));
}

#[test]
fn test_bishops_on_both_sides() {
    assert!(is_insufficient_material(&board_with(&[("c1", 'B'), ("c8", 'b')])));
    assert!(is_insufficient_material(&board_with(&[
        ("c1", 'B'),
        ("f1", 'B'),
        ("c8", 'b')
    ])));
}

#[test]
fn test_knights_of_one_side_only() {
    assert!(is_insufficient_material(&board_with(&[("b1", 'N'), ("g1", 'N')])));
    assert!(!is_insufficient_material(&board_with(&[("b1", 'N'), ("g8", 'n')])));
}

#[test]
fn test_mixed_minor_pieces_are_sufficient() {
    assert!(!is_insufficient_material(&board_with(&[("b1", 'N'), ("c1", 'B')])));
    assert!(!is_insufficient_material(&board_with(&[("b1", 'N'), ("c8", 'b')])));
}
