use crate::game_repr::{Move, MoveList, Position, Square, DIRECTIONS};

impl Position {
    /// Plain slides for the king on `from`: every square of each empty
    /// diagonal run is a separate move.
    pub fn king_slides_into(&self, from: Square, moves: &mut MoveList) {
        for dir in DIRECTIONS {
            let mut step = 1;
            while let Some(to) = from.offset(dir, step) {
                if !self.piece_at(to).is_none() {
                    break;
                }
                moves.push(Move::new(from, to));
                step += 1;
            }
        }
    }

    pub fn king_slides(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.king_slides_into(from, &mut moves);
        moves
    }
}
