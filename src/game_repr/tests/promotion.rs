use super::*;

// ==================== PROMOTION TESTS ====================

#[test]
fn test_white_man_promotes_on_row_zero() {
    let mut pos = empty_board(Color::White);
    place_piece(&mut pos, 1, 2, Piece::WhiteMan);

    let moves = pos.all_legal_moves();
    let mv = moves.iter().find(|m| m.to == sq(0, 1)).unwrap();
    pos.make_move(mv);

    assert_eq!(pos.piece_at(sq(0, 1)), Piece::WhiteKing);
    assert_eq!(pos.piece_at(sq(1, 2)), Piece::Empty);
}

#[test]
fn test_black_man_promotes_on_row_nine() {
    let mut pos = empty_board(Color::Black);
    place_piece(&mut pos, 8, 1, Piece::BlackMan);

    let moves = pos.all_legal_moves();
    assert_eq!(moves.len(), 2);
    for mv in &moves {
        let next = pos.apply(mv);
        assert_eq!(next.piece_at(mv.to), Piece::BlackKing);
    }
}

#[test]
fn test_capture_ending_on_far_rank_promotes() {
    let mut pos = empty_board(Color::White);
    place_piece(&mut pos, 2, 3, Piece::WhiteMan);
    place_piece(&mut pos, 1, 4, Piece::BlackMan);

    let moves = pos.all_legal_moves();
    assert_eq!(moves.len(), 1);

    let next = pos.apply(&moves[0]);
    assert_eq!(next.piece_at(sq(0, 5)), Piece::WhiteKing);
    assert_eq!(next.piece_at(sq(1, 4)), Piece::Empty);
}

#[test]
fn test_man_passing_the_far_rank_stays_a_man() {
    let mut pos = empty_board(Color::White);
    place_piece(&mut pos, 2, 5, Piece::WhiteMan);
    place_piece(&mut pos, 1, 4, Piece::BlackMan);
    place_piece(&mut pos, 1, 2, Piece::BlackMan);

    let moves = pos.all_legal_moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].to, sq(2, 1));
    assert_eq!(moves[0].capture_count(), 2);

    let next = pos.apply(&moves[0]);
    assert_eq!(next.piece_at(sq(2, 1)), Piece::WhiteMan);
    assert_eq!(next.count(Color::Black), 0);
}

#[test]
fn test_unmake_restores_promoted_man() {
    let mut pos = empty_board(Color::White);
    place_piece(&mut pos, 1, 8, Piece::WhiteMan);
    let before = pos;

    let mv = Move::new(sq(1, 8), sq(0, 9));
    let undo = pos.make_move(&mv);
    assert_eq!(pos.piece_at(sq(0, 9)), Piece::WhiteKing);

    pos.unmake_move(&mv, undo);
    assert_eq!(pos, before);
}

#[test]
fn test_kings_do_not_change_on_home_rank() {
    let mut pos = empty_board(Color::Black);
    place_piece(&mut pos, 8, 3, Piece::BlackKing);

    let mv = Move::new(sq(8, 3), sq(9, 2));
    let next = pos.apply(&mv);
    assert_eq!(next.piece_at(sq(9, 2)), Piece::BlackKing);
}
