// Move ordering for alpha-beta search
//
// Order: hash move, captures (longer chains and king captures first),
// killer moves, then quiet moves by history score.

use crate::game_repr::{Move, MoveList, Position, NUM_SQUARES};
use smallvec::SmallVec;

/// Deepest ply the killer table covers
pub const MAX_PLY: usize = 64;

const HASH_MOVE_SCORE: i32 = 1_000_000;
const CAPTURE_BASE: i32 = 100_000;
const CAPTURE_PER_PIECE: i32 = 1_000;
const CAPTURED_KING_BONUS: i32 = 100;
const KILLER_SCORES: [i32; 2] = [90_000, 80_000];
const HISTORY_CAP: i32 = 70_000;

/// Two quiet moves per ply that recently caused a beta cutoff
pub struct KillerMoves {
    slots: Vec<[Option<Move>; 2]>,
}

impl KillerMoves {
    pub fn new() -> Self {
        Self {
            slots: vec![[None, None]; MAX_PLY],
        }
    }

    pub fn store(&mut self, ply: usize, mv: &Move) {
        let Some(slot) = self.slots.get_mut(ply) else {
            return;
        };
        if slot[0].as_ref() == Some(mv) {
            return;
        }
        slot[1] = slot[0].take();
        slot[0] = Some(mv.clone());
    }

    /// Killer slot (0 = most recent) holding `mv` at `ply`
    pub fn slot_of(&self, ply: usize, mv: &Move) -> Option<usize> {
        self.slots
            .get(ply)?
            .iter()
            .position(|k| k.as_ref() == Some(mv))
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = [None, None];
        }
    }
}

impl Default for KillerMoves {
    fn default() -> Self {
        Self::new()
    }
}

/// Butterfly history: cutoff credit per (from, to) pair
pub struct HistoryTable {
    scores: Vec<i32>,
}

impl HistoryTable {
    pub fn new() -> Self {
        Self {
            scores: vec![0; NUM_SQUARES * NUM_SQUARES],
        }
    }

    #[inline]
    fn index(mv: &Move) -> usize {
        mv.from.index() * NUM_SQUARES + mv.to.index()
    }

    /// Credit a quiet move that raised alpha or cut off at `depth`
    pub fn update(&mut self, mv: &Move, depth: u8) {
        let bonus = depth as i32 * depth as i32;
        let score = &mut self.scores[Self::index(mv)];
        *score = score.saturating_add(bonus).min(HISTORY_CAP);
    }

    pub fn get(&self, mv: &Move) -> i32 {
        self.scores[Self::index(mv)]
    }

    pub fn clear(&mut self) {
        self.scores.iter_mut().for_each(|s| *s = 0);
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Score a single move for ordering purposes (higher = searched earlier)
fn score_move(
    pos: &Position,
    mv: &Move,
    hash_move: Option<&Move>,
    killers: &KillerMoves,
    history: &HistoryTable,
    ply: usize,
) -> i32 {
    if hash_move == Some(mv) {
        return HASH_MOVE_SCORE;
    }

    if mv.is_capture() {
        let kings = mv
            .captures
            .iter()
            .filter(|&&sq| pos.piece_at(sq).is_king())
            .count() as i32;
        return CAPTURE_BASE
            + CAPTURE_PER_PIECE * mv.capture_count() as i32
            + CAPTURED_KING_BONUS * kings;
    }

    if let Some(slot) = killers.slot_of(ply, mv) {
        return KILLER_SCORES[slot];
    }

    history.get(mv)
}

/// Generate all legal moves of `pos`, best candidates first
pub fn generate_ordered_moves(
    pos: &Position,
    hash_move: Option<&Move>,
    killers: &KillerMoves,
    history: &HistoryTable,
    ply: usize,
) -> MoveList {
    let mut moves = MoveList::new();
    pos.all_legal_moves_into(&mut moves);

    if moves.len() <= 1 {
        return moves;
    }

    let mut scored: SmallVec<[(i32, Move); 32]> = moves
        .into_iter()
        .map(|mv| (score_move(pos, &mv, hash_move, killers, history, ply), mv))
        .collect();

    // Stable, so equal scores keep generation order
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored.into_iter().map(|(_, mv)| mv).collect()
}
