//! NegamaxPlayer - draughts AI using Negamax with Alpha-Beta pruning
//!
//! The NegamaxPlayer implements the Player trait and delegates move selection to
//! the search module's `iterative_deepening_search`, passing along the game's
//! position history so repetitions are scored correctly.
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 2, 0.5 s
//! - **Medium**: Depth 4, 1 s
//! - **Hard**: Depth 6, 3 s
//! - **Expert**: Depth 10, 5 s
//!
//! # Examples
//!
//! ```
//! use draughts_engine::agent::ai::{Difficulty, NegamaxPlayer};
//! use draughts_engine::agent::Player;
//! use draughts_engine::game::Game;
//!
//! let game = Game::new();
//! let mut ai = NegamaxPlayer::with_difficulty(Difficulty::Easy);
//! let mv = ai.get_move(&game).expect("the starting position has moves");
//! assert!(game.position().is_legal_move(&mv));
//! ```

use super::search::{search_game, SearchLimits, SearchResult};
use crate::agent::player::{GameResult, Player};
use crate::game::Game;
use crate::game_repr::Move;

/// AI difficulty levels that map to search depth and time controls
///
/// Higher difficulty levels produce stronger play but take longer to compute moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Difficulty {
    /// Easy difficulty: Depth 2, 500 ms
    Easy,

    /// Medium difficulty: Depth 4, 1 second
    Medium,

    /// Hard difficulty: Depth 6, 3 seconds
    Hard,

    /// Expert difficulty: Depth 10, 5 seconds
    Expert,
}

impl Difficulty {
    /// Get the maximum search depth (in plies) for this difficulty level
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 10,
        }
    }

    /// Get the time limit in milliseconds for this difficulty level
    pub fn time_limit_ms(&self) -> u64 {
        match self {
            Difficulty::Easy => 500,
            Difficulty::Medium => 1000,
            Difficulty::Hard => 3000,
            Difficulty::Expert => 5000,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits::depth(self.max_depth()).with_time_limit(self.time_limit_ms())
    }
}

/// AI Player that searches with iterative-deepening negamax
///
/// Deterministic for a fixed depth: the same game always yields the same
/// move. With a time limit the reached depth depends on machine speed.
pub struct NegamaxPlayer {
    /// AI difficulty level determining search depth and time control
    difficulty: Difficulty,

    /// Display name for this AI player, used in logs
    name: String,

    /// Statistics of the most recent search
    last_result: Option<SearchResult>,
}

impl NegamaxPlayer {
    /// Create a new NegamaxPlayer with custom difficulty and name
    pub fn new(difficulty: Difficulty, name: String) -> Self {
        Self {
            difficulty,
            name,
            last_result: None,
        }
    }

    /// Create a new NegamaxPlayer with an auto-generated name "AI ({difficulty})"
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(difficulty, name)
    }

    /// Get the current difficulty level
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Set a new difficulty level
    ///
    /// The name is updated to reflect the new difficulty if it was auto-generated.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if self.name.starts_with("AI (") {
            self.name = format!("AI ({})", difficulty.name());
        }
    }

    /// Statistics of the most recent `get_move` search
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }
}

impl Default for NegamaxPlayer {
    fn default() -> Self {
        Self::with_difficulty(Difficulty::Medium)
    }
}

impl Player for NegamaxPlayer {
    /// Search the game's current position and return the best move found,
    /// or `None` when the side to move has no legal moves.
    fn get_move(&mut self, game: &Game) -> Option<Move> {
        let result = search_game(game, &self.difficulty.limits());

        log::debug!(
            "[{}] depth {} nodes {} score {} ({} ms)",
            self.name,
            result.depth,
            result.nodes,
            result.score,
            result.time_ms
        );

        let best = result.best_move.clone();
        self.last_result = Some(result);
        best
    }

    fn game_ended(&mut self, result: GameResult) {
        log::debug!("[{}] game over: {:?}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
