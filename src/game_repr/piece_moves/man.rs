use crate::game_repr::{Move, MoveList, Position, Square};

impl Position {
    /// Plain forward steps for the man on `from`: one diagonal square
    /// towards the opponent, onto an empty square.
    pub fn man_steps_into(&self, from: Square, moves: &mut MoveList) {
        let piece = self.piece_at(from);
        let Some(color) = piece.color() else {
            return;
        };
        let forward = color.forward();

        for dc in [-1, 1] {
            if let Some(to) = from.offset((forward, dc), 1) {
                if self.piece_at(to).is_none() {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }

    pub fn man_steps(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.man_steps_into(from, &mut moves);
        moves
    }
}
