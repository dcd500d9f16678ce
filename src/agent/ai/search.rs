// Iterative Deepening Search Orchestrator
//
// Searches depth 1, 2, 3, ... up to max_depth, using results from previous
// iterations to order moves. The result always comes from the deepest
// depth that finished; a depth cut short by the clock or a stop request is
// thrown away. Depth 1 always runs to completion.

use super::move_ordering::generate_ordered_moves;
use super::negamax::{self, negamax, SearchContext, INFINITY, MATE_SCORE};
use crate::game::{is_progress_move, Game};
use crate::game_repr::zobrist::PositionKey;
use crate::game_repr::{Color, Move, Position};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Budget of one search
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    pub max_depth: u8,
    pub time_limit_ms: Option<u64>,
    /// Raised by another thread to stop the search early
    pub stop: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    pub fn depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn with_time_limit(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = Some(time_limit_ms);
        self
    }

    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }
}

/// Result of a search operation
///
/// `score` is relative to the side to move in the searched position; use
/// [`SearchResult::white_relative`] for a White-positive value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    /// Deepest fully completed depth
    pub depth: u8,
    pub nodes: u64,
    pub nps: u64,
    pub time_ms: u64,
}

impl SearchResult {
    /// Score from White's point of view
    pub fn white_relative(&self, side_to_move: Color) -> i32 {
        match side_to_move {
            Color::White => self.score,
            Color::Black => -self.score,
        }
    }

    /// Moves to mate, positive when the side to move mates
    pub fn mate_in(&self) -> Option<i32> {
        negamax::mate_in(self.score)
    }

    pub fn is_mate(&self) -> bool {
        negamax::is_mate_score(self.score)
    }
}

fn nodes_per_second(nodes: u64, elapsed_ms: u64) -> u64 {
    if elapsed_ms > 0 {
        nodes * 1000 / elapsed_ms
    } else {
        nodes
    }
}

/// Perform iterative deepening search to find the best move
///
/// # Arguments
/// * `pos` - Current position to search
/// * `history` - Keys of positions already reached in the game, the root
///   included, oldest first
/// * `no_progress` - No-progress ply counter of the root position
/// * `limits` - Depth, time and stop budget
///
/// # Returns
/// SearchResult containing the best move and search statistics
pub fn iterative_deepening_search(
    pos: &Position,
    history: &[PositionKey],
    no_progress: u32,
    limits: &SearchLimits,
) -> SearchResult {
    let mut ctx = SearchContext::new(history, no_progress, limits.time_limit_ms, limits.stop.clone());
    let mut best_result = SearchResult::default();

    // Clone position for searching (we need a mutable copy)
    let mut search_pos = *pos;

    // Principal variation (best move from previous iteration)
    let mut pv_move: Option<Move> = None;

    // Ensure we search at least depth 1
    let max_depth = limits.max_depth.max(1);

    for depth in 1..=max_depth {
        if depth > 1 && (ctx.time_is_up() || ctx.stop_requested()) {
            break;
        }
        ctx.set_interruptible(depth > 1);

        let moves = generate_ordered_moves(&search_pos, pv_move.as_ref(), &ctx.killers, &ctx.history, 0);

        // No legal moves: lost
        if moves.is_empty() {
            best_result.score = -MATE_SCORE;
            best_result.time_ms = ctx.elapsed_ms();
            return best_result;
        }

        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best_score = -INFINITY;
        let mut best_move_this_depth: Option<Move> = None;

        for (i, mv) in moves.iter().enumerate() {
            let progress = is_progress_move(&search_pos, mv);
            let undo = search_pos.make_move(mv);
            ctx.enter(&search_pos, progress);

            let score = if i == 0 {
                -negamax(&mut search_pos, depth - 1, 1, -beta, -alpha, &mut ctx).0
            } else {
                let scout = -negamax(&mut search_pos, depth - 1, 1, -alpha - 1, -alpha, &mut ctx).0;
                if scout > alpha && !ctx.stopped() {
                    -negamax(&mut search_pos, depth - 1, 1, -beta, -alpha, &mut ctx).0
                } else {
                    scout
                }
            };

            ctx.leave();
            search_pos.unmake_move(mv, undo);

            if ctx.stopped() {
                break;
            }

            if score > best_score {
                best_score = score;
                best_move_this_depth = Some(mv.clone());
            }
            if score > alpha {
                alpha = score;
            }
        }

        if ctx.stopped() {
            log::debug!("depth {} abandoned after {} ms", depth, ctx.elapsed_ms());
            break;
        }

        let time_ms = ctx.elapsed_ms();
        best_result = SearchResult {
            best_move: best_move_this_depth.clone(),
            score: best_score,
            depth,
            nodes: ctx.nodes,
            nps: nodes_per_second(ctx.nodes, time_ms),
            time_ms,
        };
        pv_move = best_move_this_depth;

        log_search_info(&best_result);

        // A forced result does not change with more depth
        if best_result.is_mate() {
            break;
        }
    }

    // Count nodes of an abandoned depth as well
    best_result.nodes = ctx.nodes;
    best_result.time_ms = ctx.elapsed_ms();
    best_result.nps = nodes_per_second(ctx.nodes, best_result.time_ms);
    best_result
}

/// Search the current position of `game`, continuing its repetition
/// history and no-progress counter.
pub fn search_game(game: &Game, limits: &SearchLimits) -> SearchResult {
    iterative_deepening_search(game.position(), game.history_keys(), game.no_progress_plies(), limits)
}

/// Log search information for a completed depth
fn log_search_info(result: &SearchResult) {
    let best = result
        .best_move
        .as_ref()
        .map_or_else(|| "none".to_string(), Move::to_string);

    log::info!(
        "depth {} score {} nodes {} time {} nps {} pv {}",
        result.depth,
        result.score,
        result.nodes,
        result.time_ms,
        result.nps,
        best
    );
}
