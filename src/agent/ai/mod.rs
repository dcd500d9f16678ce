// AI Agent - Negamax with Alpha-Beta Pruning
//
// Classical draughts AI: negamax with alpha-beta pruning and principal
// variation search under iterative deepening.
//
// Key features:
// - Deterministic for a fixed depth (same position gives same move)
// - Transposition table keyed by the Zobrist position key
// - Quiescence search over captures to avoid the horizon effect
// - Move ordering: hash move, captures, killers, history
// - Repetition and no-progress draws scored inside the tree

mod evaluation;
mod move_ordering;
mod negamax;
mod negamax_player;
mod quiescence;
mod search;
mod transposition_table;
pub mod worker;

#[cfg(test)]
mod tests;

pub use negamax_player::{Difficulty, NegamaxPlayer};

// Re-export useful types
pub use evaluation::{evaluate, evaluate_material, evaluate_white, game_phase, EvaluationBreakdown, GamePhase};
pub use negamax::{is_mate_score, mate_in, MATE_SCORE, MATE_THRESHOLD};
pub use quiescence::quiescence_search;
pub use search::{iterative_deepening_search, search_game, SearchLimits, SearchResult};
pub use transposition_table::TranspositionTable;
pub use worker::EngineWorker;
