// Tests for move ordering

use crate::agent::ai::move_ordering::{generate_ordered_moves, HistoryTable, KillerMoves};
use crate::game_repr::{Color, Piece, Position, Square};

#[test]
fn test_ordering_preserves_moves() {
    let pos = Position::starting();
    let ordered = generate_ordered_moves(&pos, None, &KillerMoves::new(), &HistoryTable::new(), 0);
    let regular = pos.all_legal_moves();

    assert_eq!(ordered.len(), regular.len());
    for mv in &regular {
        assert!(ordered.contains(mv));
    }
}

#[test]
fn test_hash_move_comes_first() {
    let pos = Position::starting();
    let hash = pos.all_legal_moves()[5].clone();

    let ordered =
        generate_ordered_moves(&pos, Some(&hash), &KillerMoves::new(), &HistoryTable::new(), 0);

    assert_eq!(ordered[0], hash);
}

#[test]
fn test_killers_are_per_ply() {
    let pos = Position::starting();
    let moves = pos.all_legal_moves();
    let mut killers = KillerMoves::new();
    killers.store(3, &moves[7]);
    killers.store(3, &moves[4]);

    let at_three = generate_ordered_moves(&pos, None, &killers, &HistoryTable::new(), 3);
    assert_eq!(at_three[0], moves[4]);
    assert_eq!(at_three[1], moves[7]);

    let at_two = generate_ordered_moves(&pos, None, &killers, &HistoryTable::new(), 2);
    assert_eq!(at_two[0], moves[0]);
}

#[test]
fn test_killer_store_does_not_duplicate() {
    let pos = Position::starting();
    let moves = pos.all_legal_moves();
    let mut killers = KillerMoves::new();

    killers.store(1, &moves[2]);
    killers.store(1, &moves[2]);
    assert_eq!(killers.slot_of(1, &moves[2]), Some(0));

    killers.store(1, &moves[3]);
    assert_eq!(killers.slot_of(1, &moves[3]), Some(0));
    assert_eq!(killers.slot_of(1, &moves[2]), Some(1));

    killers.clear();
    assert_eq!(killers.slot_of(1, &moves[2]), None);
}

#[test]
fn test_history_orders_quiet_moves() {
    let pos = Position::starting();
    let moves = pos.all_legal_moves();
    let mut history = HistoryTable::new();
    history.update(&moves[6], 3);
    history.update(&moves[2], 5);

    let ordered = generate_ordered_moves(&pos, None, &KillerMoves::new(), &history, 0);

    assert_eq!(ordered[0], moves[2]);
    assert_eq!(ordered[1], moves[6]);
}

#[test]
fn test_history_is_capped() {
    let pos = Position::starting();
    let mv = pos.all_legal_moves()[0].clone();
    let mut history = HistoryTable::new();

    for _ in 0..10_000 {
        history.update(&mv, 60);
    }

    assert_eq!(history.get(&mv), 70_000);
}

#[test]
fn test_king_capture_ordered_first() {
    // Two single captures: a man on (5,2) and a king on (5,4)
    let mut pos = Position::empty(Color::White);
    pos.set_piece(Square::new(6, 3), Piece::WhiteMan);
    pos.set_piece(Square::new(5, 2), Piece::BlackMan);
    pos.set_piece(Square::new(5, 4), Piece::BlackKing);

    let ordered = generate_ordered_moves(&pos, None, &KillerMoves::new(), &HistoryTable::new(), 0);

    assert_eq!(ordered.len(), 2);
    assert_eq!(ordered[0].captures.as_slice(), [Square::new(5, 4)]);
}
