use super::*;

// ==================== MAN MOVEMENT TESTS ====================

#[test]
fn test_starting_position_has_no_captures() {
    let pos = Position::starting();

    assert!(pos.capture_sequences().is_empty());
    assert!(pos.capture_moves().is_empty());
}

#[test]
fn test_starting_position_forward_steps() {
    let pos = Position::starting();
    let moves = pos.all_legal_moves();

    // Only the row 6 men can move; 9 single steps onto row 5.
    assert_eq!(moves.len(), 9);
    assert!(moves.iter().all(|m| m.from.row == 6 && m.to.row == 5));
    assert!(moves.iter().all(|m| !m.is_capture()));

    // An unobstructed man steps onto both forward diagonals.
    assert!(has_move(&moves, (6, 3), (5, 2)));
    assert!(has_move(&moves, (6, 3), (5, 4)));
    // The edge man has only one diagonal.
    assert!(has_move(&moves, (6, 9), (5, 8)));
    assert_eq!(pos.legal_moves(sq(6, 9)).len(), 1);
}

#[test]
fn test_black_men_move_towards_row_nine() {
    let mut pos = Position::starting();
    pos.side_to_move = Color::Black;

    let moves = pos.all_legal_moves();

    assert_eq!(moves.len(), 9);
    assert!(moves.iter().all(|m| m.from.row == 3 && m.to.row == 4));
}

#[test]
fn test_man_does_not_step_backwards() {
    let mut pos = empty_board(Color::White);
    place_piece(&mut pos, 5, 4, Piece::WhiteMan);

    let moves = pos.all_legal_moves();

    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, (5, 4), (4, 3)));
    assert!(has_move(&moves, (5, 4), (4, 5)));
    assert!(!has_move(&moves, (5, 4), (6, 3)));
}

#[test]
fn test_man_blocked_by_any_piece() {
    let mut pos = empty_board(Color::White);
    place_piece(&mut pos, 5, 4, Piece::WhiteMan);
    place_piece(&mut pos, 4, 3, Piece::WhiteMan);
    place_piece(&mut pos, 4, 5, Piece::BlackMan);
    place_piece(&mut pos, 3, 6, Piece::BlackMan);

    let moves = pos.legal_moves(sq(5, 4));

    assert!(moves.is_empty());
}
