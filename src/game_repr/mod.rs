mod captures;
mod error;
mod moves;
mod perft;
mod piece;
mod piece_moves;
mod position;
pub mod repetition;
pub mod wire;
pub mod zobrist;

#[cfg(test)]
mod tests;

pub use captures::find_capture_sequences;
pub use error::PositionError;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use repetition::RepetitionTracker;
pub use zobrist::PositionKey;
