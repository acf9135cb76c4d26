use super::*;
use crate::board::Position;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_startpos_has_no_checks_or_pins() {
    let pos = Position::startpos();
    let scan = scan_pins_and_checks(pos.board(), sq("e1"), Color::White);
    assert_eq!(scan, CheckScan::default());
}

#[test]
fn test_rook_pin_along_file() {
    // White king e1, white knight e4, black rook e8.
    let pos = Position::from_diagram(
        "
        k...r...
        ........
        ........
        ........
        ....N...
        ........
        ........
        ....K...
        ",
        Color::White,
    )
    .unwrap();
    let scan = scan_pins_and_checks(pos.board(), sq("e1"), Color::White);
    assert!(!scan.in_check);
    assert_eq!(
        scan.pins,
        vec![Pin {
            square: sq("e4"),
            dir: (-1, 0)
        }]
    );
    assert!(scan.pin_on(sq("e4")).unwrap().allows((1, 0)));
    assert!(!scan.pin_on(sq("e4")).unwrap().allows((0, 1)));
}

#[test]
fn test_two_defenders_on_ray_means_no_pin() {
    let pos = Position::from_diagram(
        "
        k...r...
        ........
        ........
        ....B...
        ....N...
        ........
        ........
        ....K...
        ",
        Color::White,
    )
    .unwrap();
    let scan = scan_pins_and_checks(pos.board(), sq("e1"), Color::White);
    assert!(scan.pins.is_empty());
    assert!(!scan.in_check);
}

#[test]
fn test_bishop_on_orthogonal_ray_does_not_check() {
    let pos = Position::from_diagram(
        "
        k...b...
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
    .unwrap();
    let scan = scan_pins_and_checks(pos.board(), sq("e1"), Color::White);
    assert!(!scan.in_check);
}

#[test]
fn test_knight_check_uses_zero_axis() {
    let pos = Position::from_diagram(
        "
        k.......
        ........
        ........
        ........
        ........
        ...n....
        ........
        ....K...
        ",
        Color::White,
    )
    .unwrap();
    let scan = scan_pins_and_checks(pos.board(), sq("e1"), Color::White);
    assert!(scan.in_check);
    assert_eq!(
        scan.checks,
        vec![Check {
            attacker: sq("d3"),
            dir: NO_AXIS
        }]
    );
}

#[test]
fn test_pawn_attacks_only_forward_diagonally() {
    // Black pawn on d2 attacks e1; a black pawn behind the king does not.
    let pos = Position::from_diagram(
        "
        k.......
        ........
        ........
        ........
        ........
        ........
        ...p....
        ....K...
        ",
        Color::White,
    )
    .unwrap();
    assert!(is_square_attacked(pos.board(), sq("e1"), Color::Black));
    assert!(is_square_attacked(pos.board(), sq("c1"), Color::Black));
    assert!(!is_square_attacked(pos.board(), sq("d1"), Color::Black));
    assert!(!is_square_attacked(pos.board(), sq("e3"), Color::Black));

    // White pawn on d2 attacks upwards: c3 and e3.
    let pos = Position::from_diagram(
        "
        k.......
        ........
        ........
        ........
        ........
        ........
        ...P....
        ....K...
        ",
        Color::White,
    )
    .unwrap();
    assert!(is_square_attacked(pos.board(), sq("e3"), Color::White));
    assert!(is_square_attacked(pos.board(), sq("c3"), Color::White));
    assert!(!is_square_attacked(pos.board(), sq("c1"), Color::White));
}

#[test]
fn test_double_check() {
    let pos = Position::from_diagram(
        "
        k...r...
        ........
        ........
        ........
        ........
        ...n....
        ........
        ....K...
        ",
        Color::White,
    )
    .unwrap();
    let scan = scan_pins_and_checks(pos.board(), sq("e1"), Color::White);
    assert!(scan.in_check);
    assert_eq!(scan.checks.len(), 2);
}

#[test]
fn test_vacated_square_exposes_ray() {
    // King on e2 checked by rook on e8; stepping to e1 stays on the ray.
    let pos = Position::from_diagram(
        "
        k...r...
        ........
        ........
        ........
        ........
        ........
        ....K...
        ........
        ",
        Color::White,
    )
    .unwrap();
    assert!(!is_square_attacked(pos.board(), sq("e1"), Color::Black));
    assert!(is_attacked_if_vacated(pos.board(), sq("e1"), Color::Black, sq("e2")));
}
