// Quiescence Search - Tactical Stability Extension
//
// A fixed-depth search can stop in the middle of an exchange and
// misjudge the position badly. Quiescence search extends every leaf with
// captures only (under the same maximum-capture rule as the main move
// generator) until the position is quiet, so leaves are evaluated after
// forcing sequences have played out.
//
// Stand-pat: the static evaluation is a lower bound for the side to move
// and can cut off on its own. Recursion stops after MAX_QSEARCH_PLY plies.

use super::evaluation::evaluate;
use crate::game_repr::{MoveList, Position};

/// Maximum depth for quiescence search to prevent runaway capture chains
pub const MAX_QSEARCH_PLY: u32 = 10;

/// Quiescence search - search until position is quiet
///
/// Fail-hard: the result always lies in `[alpha, beta]`.
///
/// # Arguments
///
/// * `pos` - Current position (mutable for make/unmake moves)
/// * `alpha` - Lower bound
/// * `beta` - Upper bound
/// * `qply` - Plies already spent in quiescence
/// * `nodes` - Node counter, incremented once per visited position
///
/// # Returns
///
/// Evaluation score from the perspective of the side to move
pub fn quiescence(pos: &mut Position, mut alpha: i32, beta: i32, qply: u32, nodes: &mut u64) -> i32 {
    *nodes += 1;

    // Stand-pat evaluation: current position value without any moves
    let stand_pat = evaluate(pos);

    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    if qply > MAX_QSEARCH_PLY {
        return alpha;
    }

    let mut captures = MoveList::new();
    if !pos.capture_moves_into(&mut captures) {
        // Quiet position
        return alpha;
    }

    for mv in &captures {
        let undo = pos.make_move(mv);
        let score = -quiescence(pos, -beta, -alpha, qply + 1, nodes);
        pos.unmake_move(mv, undo);

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Public wrapper for quiescence search with initial qply of 0
///
/// This is the entry point used by the main search at depth 0.
pub fn quiescence_search(pos: &mut Position, alpha: i32, beta: i32, nodes: &mut u64) -> i32 {
    quiescence(pos, alpha, beta, 0, nodes)
}
