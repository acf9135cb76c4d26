use super::*;
use crate::board::Position;
use crate::error::SquareError;
use crate::movegen::legal_moves;

fn find(pos: &mut Position, text: &str) -> Move {
    let legal = legal_moves(pos);
    parse_coordinate_move(text, &legal).unwrap().0
}

#[test]
fn test_pawn_and_piece_notation() {
    let mut pos = Position::startpos();
    let push = find(&mut pos, "e2e4");
    assert_eq!(notation(&push), "e2-e4");
    let knight = find(&mut pos, "g1f3");
    assert_eq!(knight.to_string(), "Ng1-f3");
}

#[test]
fn test_capture_and_en_passant_notation() {
    let mut pos = Position::startpos();
    for text in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        let mv = find(&mut pos, text);
        pos.apply(mv, None);
    }
    let ep = find(&mut pos, "e5d6");
    assert_eq!(notation(&ep), "e5xd6 e.p.");

    let mut pos = Position::startpos();
    for text in ["e2e4", "d7d5"] {
        let mv = find(&mut pos, text);
        pos.apply(mv, None);
    }
    assert_eq!(notation(&find(&mut pos, "e4d5")), "e4xd5");
}

#[test]
fn test_castling_notation() {
    let mut pos = Position::from_diagram(
        "
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        R...K..R
        ",
        Color::White,
    )
    .unwrap();
    assert_eq!(find(&mut pos, "e1g1").to_string(), "O-O");
    assert_eq!(find(&mut pos, "e1c1").to_string(), "O-O-O");
}

#[test]
fn test_promotion_notation_before_and_after_apply() {
    let mut pos = Position::from_diagram(
        "
        .......k
        P.......
        ........
        ........
        ........
        ........
        ........
        ....K...
        ",
        Color::White,
    )
    .unwrap();
    let legal = legal_moves(&mut pos);
    let (mv, promo) = parse_coordinate_move("a7a8n", &legal).unwrap();
    assert_eq!(promo, Some(PieceKind::Knight));
    assert_eq!(notation(&mv), "a7-a8 (promotion)");

    pos.apply(mv, promo);
    assert_eq!(notation(&pos.move_log()[0]), "a7-a8=N");
}

#[test]
fn test_parse_rejects_bad_text() {
    let mut pos = Position::startpos();
    let legal = legal_moves(&mut pos);

    assert_eq!(
        parse_coordinate_move("e2", &legal).unwrap_err(),
        MoveParseError::Malformed("e2".to_string())
    );
    assert_eq!(
        parse_coordinate_move("z2e4", &legal).unwrap_err(),
        MoveParseError::Square(SquareError::Malformed("z2".to_string()))
    );
    assert_eq!(
        parse_coordinate_move("e2e5", &legal).unwrap_err(),
        MoveParseError::Illegal("e2e5".to_string())
    );
    assert_eq!(
        parse_coordinate_move("e2e4k", &legal).unwrap_err(),
        MoveParseError::BadPromotion('k')
    );
    assert_eq!(
        parse_coordinate_move("e2e4q", &legal).unwrap_err(),
        MoveParseError::Illegal("e2e4q".to_string())
    );
}

#[test]
fn test_parse_is_case_insensitive_and_trims() {
    let mut pos = Position::startpos();
    let legal = legal_moves(&mut pos);
    let (mv, promo) = parse_coordinate_move("  E2E4\n", &legal).unwrap();
    assert_eq!(mv.to_coordinate(), "e2e4");
    assert_eq!(promo, None);
}
