use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board(side: Color) -> Position {
    Position::empty(side)
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut Position, row: u8, col: u8, piece: Piece) {
    pos.set_piece(Square::new(row, col), piece);
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: (u8, u8), to: (u8, u8)) -> bool {
    moves
        .iter()
        .any(|m| m.from == Square::new(from.0, from.1) && m.to == Square::new(to.0, to.1))
}

pub fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

// ==================== TEST MODULES ====================

mod man_movement;
mod perft;
mod promotion;
