//! Plain-data shapes exchanged with collaborators outside the engine.
//!
//! A position travels as a 10x10 grid of piece codes (see `Piece::code`)
//! plus a side-to-move flag; a move as `{from, to, captures}` with
//! `{row, col}` squares. Decoding validates everything that arrives from
//! outside and reports problems as `PositionError`.

use super::{CaptureList, Color, Move, Piece, Position, PositionError, Square, BOARD_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSquare {
    pub row: u8,
    pub col: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMove {
    pub from: WireSquare,
    pub to: WireSquare,
    #[serde(default)]
    pub captures: Vec<WireSquare>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirePosition {
    pub board: [[u8; BOARD_SIZE]; BOARD_SIZE],
    pub white_to_move: bool,
}

impl From<Square> for WireSquare {
    fn from(sq: Square) -> Self {
        Self {
            row: sq.row,
            col: sq.col,
        }
    }
}

impl TryFrom<WireSquare> for Square {
    type Error = PositionError;

    fn try_from(sq: WireSquare) -> Result<Self, Self::Error> {
        let square = Square::new(sq.row, sq.col);
        if square.is_on_board() {
            Ok(square)
        } else {
            Err(PositionError::SquareOutOfBounds {
                row: sq.row,
                col: sq.col,
            })
        }
    }
}

impl From<&Move> for WireMove {
    fn from(mv: &Move) -> Self {
        Self {
            from: mv.from.into(),
            to: mv.to.into(),
            captures: mv.captures.iter().map(|&sq| sq.into()).collect(),
        }
    }
}

impl TryFrom<&WireMove> for Move {
    type Error = PositionError;

    fn try_from(mv: &WireMove) -> Result<Self, Self::Error> {
        let captures = mv
            .captures
            .iter()
            .map(|&sq| Square::try_from(sq))
            .collect::<Result<CaptureList, _>>()?;

        Ok(Move::with_captures(
            Square::try_from(mv.from)?,
            Square::try_from(mv.to)?,
            captures,
        ))
    }
}

impl From<&Position> for WirePosition {
    fn from(pos: &Position) -> Self {
        let mut board = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (row, cells) in board.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = pos.squares[row * BOARD_SIZE + col].code();
            }
        }

        Self {
            board,
            white_to_move: pos.side_to_move == Color::White,
        }
    }
}

impl TryFrom<&WirePosition> for Position {
    type Error = PositionError;

    fn try_from(wire: &WirePosition) -> Result<Self, Self::Error> {
        let side = if wire.white_to_move {
            Color::White
        } else {
            Color::Black
        };

        let mut pos = Position::empty(side);
        for (row, cells) in wire.board.iter().enumerate() {
            for (col, &code) in cells.iter().enumerate() {
                let piece = Piece::from_code(code)
                    .ok_or(PositionError::UnknownPieceCode { row, col, code })?;
                pos.squares[row * BOARD_SIZE + col] = piece;
            }
        }

        pos.validate()?;
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_survives_the_wire() {
        let pos = Position::starting();
        let wire = WirePosition::from(&pos);

        assert_eq!(wire.board[0][1], 3);
        assert_eq!(wire.board[9][0], 1);
        assert_eq!(wire.board[5][0], 0);
        assert!(wire.white_to_move);
        assert_eq!(Position::try_from(&wire), Ok(pos));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let mut wire = WirePosition::from(&Position::empty(Color::White));
        wire.board[4][5] = 9;

        assert_eq!(
            Position::try_from(&wire),
            Err(PositionError::UnknownPieceCode { row: 4, col: 5, code: 9 })
        );
    }

    #[test]
    fn light_square_pieces_are_rejected() {
        let mut wire = WirePosition::from(&Position::empty(Color::White));
        wire.board[4][4] = 1;

        assert_eq!(
            Position::try_from(&wire),
            Err(PositionError::PieceOnLightSquare { row: 4, col: 4 })
        );
    }

    #[test]
    fn out_of_board_move_is_rejected() {
        let wire = WireMove {
            from: WireSquare { row: 6, col: 1 },
            to: WireSquare { row: 10, col: 0 },
            captures: vec![],
        };

        assert!(matches!(
            Move::try_from(&wire),
            Err(PositionError::SquareOutOfBounds { row: 10, col: 0 })
        ));
    }

    #[test]
    fn move_keeps_capture_order() {
        let mv = Move::with_captures(
            Square::new(8, 1),
            Square::new(2, 3),
            [Square::new(7, 2), Square::new(5, 4), Square::new(3, 4)]
                .into_iter()
                .collect(),
        );

        let wire = WireMove::from(&mv);
        assert_eq!(wire.captures.len(), 3);
        assert_eq!(wire.captures[1], WireSquare { row: 5, col: 4 });
        assert_eq!(Move::try_from(&wire), Ok(mv));
    }
}
