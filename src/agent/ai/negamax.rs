// Negamax Search with Alpha-Beta Pruning
//
// Negamax uses the zero-sum property max(a, b) = -min(-a, -b): one function
// searches for both sides by negating the child's score.
//
// Alpha-Beta Pruning optimizations:
// - Transposition table for position caching
// - Killer move heuristic for move ordering
// - History heuristic for quiet moves
// - Principal Variation Search (PVS)
// - Quiescence search to avoid horizon effect
//
// Terminal nodes: no legal moves loses; threefold repetition and the
// no-progress rule score 0.
//
// The function returns (score, best_move) from the perspective of the side to move.

use super::move_ordering::{generate_ordered_moves, HistoryTable, KillerMoves, MAX_PLY};
use super::quiescence::quiescence_search;
use super::evaluation::evaluate;
use super::transposition_table::{NodeType, TranspositionTable, TranspositionTableEntry};
use crate::game::{is_progress_move, NO_PROGRESS_LIMIT};
use crate::game_repr::repetition::RepetitionTracker;
use crate::game_repr::zobrist::PositionKey;
use crate::game_repr::{Move, Position};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Score of a lost position at the root; mates found deeper score
/// `MATE_SCORE - ply`
pub const MATE_SCORE: i32 = 30000;

/// Scores beyond this magnitude are forced mates
pub const MATE_THRESHOLD: i32 = 20000;

/// Window bound, wider than any reachable score
pub const INFINITY: i32 = MATE_SCORE + 100;

/// How often (in nodes) the clock and the stop flag are polled
const CHECK_INTERVAL: u64 = 2048;

/// Everything one search invocation owns: tables, counters, budget and the
/// search-local view of the game history.
pub struct SearchContext {
    pub tt: TranspositionTable,
    pub killers: KillerMoves,
    pub history: HistoryTable,
    /// Game history followed by the current search line
    repetition: RepetitionTracker,
    /// No-progress counter for every position on the current line
    no_progress: Vec<u32>,
    pub nodes: u64,
    start: Instant,
    time_limit_ms: Option<u64>,
    stop: Option<Arc<AtomicBool>>,
    /// Node-level budget checks are skipped while this is false
    interruptible: bool,
    next_check: u64,
    stopped: bool,
}

impl SearchContext {
    /// # Arguments
    ///
    /// * `history` - Keys of the positions the game has already reached,
    ///   including the root position
    /// * `no_progress` - No-progress counter of the root position
    pub fn new(
        history: &[PositionKey],
        no_progress: u32,
        time_limit_ms: Option<u64>,
        stop: Option<Arc<AtomicBool>>,
    ) -> Self {
        Self {
            tt: TranspositionTable::new(),
            killers: KillerMoves::new(),
            history: HistoryTable::new(),
            repetition: RepetitionTracker::from_keys(history.iter().copied()),
            no_progress: vec![no_progress],
            nodes: 0,
            start: Instant::now(),
            time_limit_ms,
            stop,
            interruptible: false,
            next_check: CHECK_INTERVAL,
            stopped: false,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn time_is_up(&self) -> bool {
        self.time_limit_ms
            .is_some_and(|limit| self.elapsed_ms() >= limit)
    }

    pub fn stop_requested(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Allow the running depth to be abandoned when the budget runs out.
    pub fn set_interruptible(&mut self, interruptible: bool) {
        self.interruptible = interruptible;
    }

    /// True once the current depth has been abandoned
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    fn poll(&mut self) {
        if !self.interruptible || self.nodes < self.next_check {
            return;
        }
        self.next_check = self.nodes + CHECK_INTERVAL;
        if self.time_is_up() || self.stop_requested() {
            self.stopped = true;
        }
    }

    /// Push the position reached by a move onto the search line.
    pub fn enter(&mut self, child: &Position, progress: bool) {
        let current = self.no_progress.last().copied().unwrap_or(0);
        self.no_progress.push(if progress { 0 } else { current + 1 });
        self.repetition.record(child);
    }

    pub fn leave(&mut self) {
        self.no_progress.pop();
        self.repetition.pop();
    }

    fn is_draw(&self, key: PositionKey) -> bool {
        self.repetition.is_key_repeated(key)
            || self.no_progress.last().is_some_and(|&n| n >= NO_PROGRESS_LIMIT)
    }
}

/// Mate scores are stored relative to the node, not the root
fn score_to_tt(score: i32, ply: usize) -> i32 {
    if score > MATE_THRESHOLD {
        score + ply as i32
    } else if score < -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

fn score_from_tt(score: i32, ply: usize) -> i32 {
    if score > MATE_THRESHOLD {
        score - ply as i32
    } else if score < -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}

/// Negamax search with alpha-beta pruning
///
/// # Arguments
///
/// * `pos` - Current position (mutable for make/unmake moves)
/// * `depth` - Remaining search depth (0 = leaf node, call quiescence)
/// * `ply` - Distance from the root
/// * `alpha` - Lower bound (best score the side to move can guarantee)
/// * `beta` - Upper bound (best score opponent will allow)
/// * `ctx` - Tables, counters and budget of this search
///
/// # Returns
///
/// (score, best_move) - Score from perspective of the side to move, and the
/// best move found. When `ctx.stopped()` is set on return the score is
/// meaningless and must be discarded.
pub fn negamax(
    pos: &mut Position,
    depth: u8,
    ply: usize,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext,
) -> (i32, Option<Move>) {
    ctx.nodes += 1;
    ctx.poll();
    if ctx.stopped {
        return (0, None);
    }

    let key = pos.key();
    if ply > 0 && ctx.is_draw(key) {
        return (0, None);
    }

    // Base case: reached maximum depth, use quiescence search
    if depth == 0 {
        let score = quiescence_search(pos, alpha, beta, &mut ctx.nodes);
        return (score, None);
    }

    if ply >= MAX_PLY {
        return (evaluate(pos), None);
    }

    // Transposition table lookup
    let mut hash_move = None;
    if let Some(entry) = ctx.tt.probe(key) {
        if entry.depth >= depth && ply > 0 {
            let score = score_from_tt(entry.score, ply);
            match entry.node_type {
                NodeType::Exact => return (score, entry.best_move.clone()),
                NodeType::LowerBound if score >= beta => return (beta, entry.best_move.clone()),
                NodeType::UpperBound if score <= alpha => return (alpha, entry.best_move.clone()),
                _ => {}
            }
        }

        // Keep the hash move for ordering even if depth is insufficient
        hash_move = entry.best_move.clone();
    }

    let moves = generate_ordered_moves(pos, hash_move.as_ref(), &ctx.killers, &ctx.history, ply);

    // No legal moves: the side to move has lost. Nearer losses score lower.
    if moves.is_empty() {
        return (-(MATE_SCORE - ply as i32), None);
    }

    let original_alpha = alpha;
    let mut best_score = -INFINITY;
    let mut best_move: Option<Move> = None;

    for (i, mv) in moves.iter().enumerate() {
        let progress = is_progress_move(pos, mv);
        let undo = pos.make_move(mv);
        ctx.enter(pos, progress);

        // Principal Variation Search: full window for the first move, null
        // window for the rest, re-searching when a scout fails high.
        let score = if i == 0 {
            -negamax(pos, depth - 1, ply + 1, -beta, -alpha, ctx).0
        } else {
            let scout = -negamax(pos, depth - 1, ply + 1, -alpha - 1, -alpha, ctx).0;
            if scout > alpha && scout < beta && !ctx.stopped {
                -negamax(pos, depth - 1, ply + 1, -beta, -alpha, ctx).0
            } else {
                scout
            }
        };

        ctx.leave();
        pos.unmake_move(mv, undo);

        if ctx.stopped {
            return (0, None);
        }

        if score > best_score {
            best_score = score;
            best_move = Some(mv.clone());
        }

        if score >= beta {
            if !mv.is_capture() {
                ctx.killers.store(ply, mv);
                ctx.history.update(mv, depth);
            }

            ctx.tt.store(TranspositionTableEntry {
                key,
                depth,
                score: score_to_tt(beta, ply),
                best_move: Some(mv.clone()),
                node_type: NodeType::LowerBound,
            });

            return (beta, Some(mv.clone()));
        }

        if score > alpha {
            alpha = score;
            if !mv.is_capture() {
                ctx.history.update(mv, depth);
            }
        }
    }

    let node_type = if alpha > original_alpha {
        NodeType::Exact
    } else {
        NodeType::UpperBound
    };
    ctx.tt.store(TranspositionTableEntry {
        key,
        depth,
        score: score_to_tt(best_score, ply),
        best_move: best_move.clone(),
        node_type,
    });

    (best_score, best_move)
}

/// True when `score` encodes a forced win or loss
pub fn is_mate_score(score: i32) -> bool {
    score.abs() > MATE_THRESHOLD
}

/// Full moves until mate from a mate score: positive when the side to
/// move mates, negative when it gets mated. `None` for ordinary scores.
pub fn mate_in(score: i32) -> Option<i32> {
    if !is_mate_score(score) {
        return None;
    }

    let moves = (MATE_SCORE - score.abs() + 1) / 2;
    Some(if score > 0 { moves } else { -moves })
}
