// Tests for the evaluation pipeline

use crate::agent::ai::evaluation::{
    evaluate, evaluate_material, evaluate_pattern, evaluate_white, game_phase, GamePhase,
};
use crate::game_repr::{Color, Piece, Position, Square};

fn position_with(side: Color, pieces: &[((u8, u8), Piece)]) -> Position {
    let mut pos = Position::empty(side);
    for &((row, col), piece) in pieces {
        pos.set_piece(Square::new(row, col), piece);
    }
    pos
}

#[test]
fn test_starting_position_balanced() {
    let pos = Position::starting();
    let breakdown = evaluate_material(&pos);

    assert_eq!(breakdown.white_material, 2000);
    assert_eq!(breakdown.black_material, 2000);
    assert_eq!(breakdown.balance, 0);
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn test_material_breakdown_counts_kings() {
    let pos = position_with(
        Color::White,
        &[
            ((6, 1), Piece::WhiteMan),
            ((6, 3), Piece::WhiteMan),
            ((4, 5), Piece::WhiteKing),
            ((1, 2), Piece::BlackMan),
            ((1, 4), Piece::BlackMan),
        ],
    );

    let breakdown = evaluate_material(&pos);

    assert_eq!(breakdown.white_material, 650);
    assert_eq!(breakdown.black_material, 200);
    assert_eq!(breakdown.white_kings, 1);
    assert_eq!(breakdown.black_kings, 0);
    // Five pieces left: material counts half again as much
    assert_eq!(breakdown.balance, 675);
}

#[test]
fn test_perspective_flip() {
    let white = position_with(
        Color::White,
        &[((6, 1), Piece::WhiteMan), ((3, 4), Piece::BlackKing)],
    );
    let mut black = white;
    black.side_to_move = Color::Black;

    assert_eq!(evaluate(&white), evaluate_white(&white));
    assert_eq!(evaluate(&black), -evaluate_white(&white));
}

#[test]
fn test_mirrored_position_is_antisymmetric() {
    let mut pos = Position::starting();
    let moves = pos.all_legal_moves();
    pos.make_move(&moves[3]);
    let reply = pos.all_legal_moves();
    pos.make_move(&reply[0]);
    pos.set_piece(Square::new(7, 0), Piece::Empty);

    let mirrored = pos.mirrored();

    assert_eq!(evaluate_white(&mirrored), -evaluate_white(&pos));
    assert_eq!(evaluate(&mirrored), evaluate(&pos));
}

#[test]
fn test_lone_man_is_hanging() {
    let white = position_with(Color::White, &[((5, 4), Piece::WhiteMan)]);
    assert_eq!(evaluate_pattern(&white, 1.0), -25);
    assert_eq!(evaluate_pattern(&white, 0.0), -25);

    let black = position_with(Color::White, &[((4, 5), Piece::BlackMan)]);
    assert_eq!(evaluate_pattern(&black, 0.5), 25);
}

#[test]
fn test_supported_man_forms_trio() {
    // The home-rank supporters have no row behind them and are not scored
    let pos = position_with(
        Color::White,
        &[
            ((8, 3), Piece::WhiteMan),
            ((9, 2), Piece::WhiteMan),
            ((9, 4), Piece::WhiteMan),
        ],
    );

    assert_eq!(evaluate_pattern(&pos, 1.0), 10);
}

#[test]
fn test_kings_and_single_support_are_neutral() {
    let pos = position_with(
        Color::White,
        &[
            ((4, 5), Piece::WhiteKing),
            ((7, 2), Piece::WhiteMan),
            ((8, 1), Piece::WhiteMan),
        ],
    );

    // (7,2) has one supporter, (8,1) has none
    assert_eq!(evaluate_pattern(&pos, 1.0), -25);
}

#[test]
fn test_game_phase_progression() {
    let start = Position::starting();
    assert_eq!(game_phase(&start), 1.0);
    assert_eq!(GamePhase::classify(game_phase(&start)), GamePhase::Opening);

    let mut middle = Position::empty(Color::White);
    for sq in start.squares_of(Color::White).take(9) {
        middle.set_piece(sq, Piece::WhiteMan);
    }
    for sq in start.squares_of(Color::Black).take(9) {
        middle.set_piece(sq, Piece::BlackMan);
    }
    assert_eq!(game_phase(&middle), 0.5);
    assert_eq!(GamePhase::classify(game_phase(&middle)), GamePhase::Middlegame);

    let sparse = position_with(
        Color::White,
        &[((6, 1), Piece::WhiteKing), ((3, 4), Piece::BlackMan)],
    );
    assert_eq!(game_phase(&sparse), 0.0);
    assert_eq!(GamePhase::classify(game_phase(&sparse)), GamePhase::Endgame);
}

#[test]
fn test_king_outweighs_man() {
    let king = position_with(
        Color::White,
        &[((6, 1), Piece::WhiteKing), ((3, 4), Piece::BlackMan)],
    );
    let man = position_with(
        Color::White,
        &[((6, 1), Piece::WhiteMan), ((3, 4), Piece::BlackMan)],
    );

    assert!(evaluate(&king) > evaluate(&man));
    assert!(evaluate(&king) > 500);
}

#[test]
fn test_home_rank_men_are_not_scored() {
    let pos = position_with(
        Color::White,
        &[((9, 4), Piece::WhiteMan), ((0, 5), Piece::BlackMan)],
    );

    assert_eq!(evaluate_pattern(&pos, 1.0), 0);
    assert_eq!(evaluate_pattern(&pos, 0.0), 0);
}
