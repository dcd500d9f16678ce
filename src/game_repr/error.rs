use super::Color;
use thiserror::Error;

/// Rejections raised while decoding positions and moves that arrive from
/// outside the engine (wire grids, text diagrams).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("unknown piece code {code} at ({row},{col})")]
    UnknownPieceCode { row: usize, col: usize, code: u8 },

    #[error("unknown piece character {ch:?} at ({row},{col})")]
    UnknownPieceChar { row: usize, col: usize, ch: char },

    #[error("piece on light square ({row},{col})")]
    PieceOnLightSquare { row: usize, col: usize },

    #[error("square ({row},{col}) is off the board")]
    SquareOutOfBounds { row: u8, col: u8 },

    #[error("{color:?} has {count} pieces, at most 20 are allowed")]
    TooManyPieces { color: Color, count: usize },

    #[error("expected 10 rows of 10 squares, got {rows} row(s)")]
    BadDimensions { rows: usize },
}
