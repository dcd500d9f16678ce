//! International draughts (10x10) rules engine and search.
//!
//! - [`game_repr`]: board model, capture resolution, move generation,
//!   Zobrist keys and repetition tracking
//! - [`game`]: a game session with draw rules and undo
//! - [`agent`]: players, evaluation, search and the worker protocol
//! - [`orchestrator`]: headless game loop between two players

pub mod agent;
pub mod game;
pub mod game_repr;
pub mod orchestrator;
