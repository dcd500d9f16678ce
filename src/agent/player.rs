//! Player trait and associated types for draughts game agents.
//!
//! Anything that can pick a move for the side to move implements [`Player`]:
//! the search-backed [`NegamaxPlayer`](crate::agent::NegamaxPlayer), a random
//! mover used in tests, or a bridge to some external UI. The trait defines
//! behavior only; each implementation has its own constructor.
//!
//! `get_move()` is synchronous. The orchestrator asks, blocks, and then
//! commits whatever comes back through [`Game::make_move`], which is where
//! legality is checked.

use crate::game::{Game, GameStatus};
use crate::game_repr::{Color, Move};

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    /// Threefold repetition, the no-progress rule, or the ply cap
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Final result for a finished game; `None` while it is still going.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Won(color) => Some(Self::from_winner(color)),
            GameStatus::DrawByRepetition | GameStatus::DrawByNoProgress => Some(GameResult::Draw),
        }
    }
}

/// Trait for entities that can provide draughts moves.
///
/// Only `get_move()` must be implemented.
pub trait Player {
    /// Request the next move for the side to move in `game`.
    ///
    /// # Return Value
    ///
    /// - `Some(Move)`: the chosen move; the caller validates it
    /// - `None`: the player has no move to offer (resignation, or no legal
    ///   moves at all)
    fn get_move(&mut self, game: &Game) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: &Move) {}

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Display name, used in logs.
    fn name(&self) -> &str {
        "Player"
    }
}
