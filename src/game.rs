//! Game controller: one draughts game session.
//!
//! [`Game`] wraps the current [`Position`] with everything the rules need
//! beyond the board itself: the committed move history, the repetition
//! tracker and the no-progress counter. It is the surface consumed by
//! players, the orchestrator and any UI or notation layer.
//!
//! Illegal move attempts are rejected with `false` and leave the game
//! untouched; game-over is reported through [`GameStatus`], never as an
//! error.

use crate::game_repr::repetition::RepetitionTracker;
use crate::game_repr::zobrist::PositionKey;
use crate::game_repr::{Color, Move, MoveList, Piece, Position, UndoInfo};

/// Consecutive non-capturing king plies after which the game is drawn
/// (25 king moves per side).
pub const NO_PROGRESS_LIMIT: u32 = 50;

/// Outcome of the current game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move has no legal moves; the other side won.
    Won(Color),
    DrawByRepetition,
    DrawByNoProgress,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// True when `mv` resets the no-progress counter: any capture or any man move.
pub fn is_progress_move(pos: &Position, mv: &Move) -> bool {
    mv.is_capture() || pos.piece_at(mv.from).is_man()
}

struct Committed {
    mv: Move,
    undo: UndoInfo,
    no_progress: u32,
}

pub struct Game {
    position: Position,
    repetition: RepetitionTracker,
    /// Committed moves with what is needed to take them back
    history: Vec<Committed>,
    /// Plies since the last capture or man move
    no_progress: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// New game from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::starting())
    }

    /// New game from an arbitrary position. The position is recorded as the
    /// first entry of the repetition history.
    pub fn from_position(position: Position) -> Self {
        let mut repetition = RepetitionTracker::new();
        repetition.record(&position);

        Self {
            position,
            repetition,
            history: Vec::new(),
            no_progress: 0,
        }
    }

    // ===========================
    // Queries
    // ===========================

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Copy of the current position.
    pub fn to_position(&self) -> Position {
        self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Every legal move for the side to move, maximum-capture rule applied.
    pub fn legal_moves(&self) -> MoveList {
        self.position.all_legal_moves()
    }

    /// Legal captures only; empty when the side to move has none.
    pub fn available_captures(&self) -> MoveList {
        self.position.capture_moves()
    }

    pub fn is_piece_of_current_player(&self, piece: Piece) -> bool {
        piece.is(self.position.side_to_move)
    }

    /// Moves committed so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.history.iter().map(|c| &c.mv)
    }

    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Keys of every position reached in this game, including the current
    /// one; what a search needs for repetition continuity.
    pub fn history_keys(&self) -> &[PositionKey] {
        self.repetition.keys()
    }

    pub fn no_progress_plies(&self) -> u32 {
        self.no_progress
    }

    pub fn status(&self) -> GameStatus {
        if self.legal_moves().is_empty() {
            return GameStatus::Won(self.position.side_to_move.opposite());
        }
        if self.repetition.is_draw_by_repetition(&self.position) {
            return GameStatus::DrawByRepetition;
        }
        if self.no_progress >= NO_PROGRESS_LIMIT {
            return GameStatus::DrawByNoProgress;
        }
        GameStatus::Ongoing
    }

    // ===========================
    // State changes
    // ===========================

    /// Commit `mv` if it is legal in the current position.
    ///
    /// A move matches a legal move when `from`, `to` and the set of captured
    /// squares agree; capture order does not matter. Returns false and
    /// changes nothing otherwise.
    pub fn make_move(&mut self, mv: &Move) -> bool {
        let legal = self.legal_moves();
        let Some(canonical) = legal
            .into_iter()
            .find(|m| m.from == mv.from && m.to == mv.to && m.same_capture_set(mv))
        else {
            log::warn!("rejected illegal move {} in\n{}", mv, self.position);
            return false;
        };

        let previous = self.no_progress;
        self.no_progress = if is_progress_move(&self.position, &canonical) {
            0
        } else {
            self.no_progress + 1
        };

        let undo = self.position.make_move(&canonical);
        self.repetition.record(&self.position);
        self.history.push(Committed {
            mv: canonical,
            undo,
            no_progress: previous,
        });
        true
    }

    /// Take back the last committed move. Returns it, or `None` at the
    /// start of the game.
    pub fn undo(&mut self) -> Option<Move> {
        let Committed {
            mv,
            undo,
            no_progress,
        } = self.history.pop()?;

        self.repetition.pop();
        self.position.unmake_move(&mv, undo);
        self.no_progress = no_progress;
        Some(mv)
    }
}
