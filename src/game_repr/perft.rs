// Perft: count leaf nodes of the legal move tree to a fixed depth.
// Used to validate the move generator against published counts.

use super::{MoveList, Position};
use rayon::prelude::*;

impl Position {
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut moves = MoveList::new();
        self.all_legal_moves_into(&mut moves);

        if depth == 1 {
            return moves.len() as u64;
        }

        let mut pos = *self;
        let mut nodes = 0;
        for mv in &moves {
            let undo = pos.make_move(mv);
            nodes += pos.perft(depth - 1);
            pos.unmake_move(mv, undo);
        }
        nodes
    }

    /// Perft with the root moves split across the rayon pool.
    pub fn perft_parallel(&self, depth: u32) -> u64 {
        if depth <= 1 {
            return self.perft(depth);
        }

        let moves = self.all_legal_moves();
        moves
            .par_iter()
            .map(|mv| self.apply(mv).perft(depth - 1))
            .sum()
    }

    /// Node count below each root move.
    pub fn perft_divide(&self, depth: u32) -> Vec<(String, u64)> {
        let depth = depth.max(1);
        self.all_legal_moves()
            .iter()
            .map(|mv| (mv.to_string(), self.apply(mv).perft(depth - 1)))
            .collect()
    }
}
