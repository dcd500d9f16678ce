use super::captures::find_capture_sequences;
use super::zobrist::{self, PositionKey};
use super::*;
use smallvec::SmallVec;
use std::fmt;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// Maximum number of pieces a side may own.
pub const MAX_PIECES_PER_SIDE: usize = 20;

/// A 10x10 board plus the side to move. Cheap to copy; search code either
/// copies it or pairs `make_move` with `unmake_move`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub squares: [Piece; NUM_SQUARES],
    pub side_to_move: Color,
}

/// Everything `unmake_move` needs to restore a position exactly.
#[derive(Clone, Debug)]
pub struct UndoInfo {
    mover: Piece,
    captured: SmallVec<[Piece; 12]>,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            squares: [Piece::Empty; NUM_SQUARES],
            side_to_move,
        }
    }

    /// Black men on the dark squares of rows 0-3, White men on rows 6-9,
    /// White to move.
    pub fn starting() -> Self {
        let mut pos = Self::empty(Color::White);
        for idx in 0..NUM_SQUARES {
            let sq = Square::from_index(idx);
            if !sq.is_dark() {
                continue;
            }
            match sq.row {
                0..=3 => pos.set_piece(sq, Piece::BlackMan),
                6..=9 => pos.set_piece(sq, Piece::WhiteMan),
                _ => {}
            }
        }
        pos
    }

    /// Parse a text diagram: ten rows of ten characters, row 0 first, using
    /// `.` `w` `W` `b` `B`. Whitespace inside a row is ignored.
    pub fn from_diagram(diagram: &str, side_to_move: Color) -> Result<Self, PositionError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE || rows.iter().any(|r| r.len() != BOARD_SIZE) {
            return Err(PositionError::BadDimensions { rows: rows.len() });
        }

        let mut pos = Self::empty(side_to_move);
        for (row, chars) in rows.iter().enumerate() {
            for (col, &ch) in chars.iter().enumerate() {
                let piece = Piece::from_char(ch)
                    .ok_or(PositionError::UnknownPieceChar { row, col, ch })?;
                pos.squares[row * BOARD_SIZE + col] = piece;
            }
        }

        pos.validate()?;
        Ok(pos)
    }

    /// Check the board invariants: light squares empty, at most 20 pieces
    /// per side.
    pub fn validate(&self) -> Result<(), PositionError> {
        for idx in 0..NUM_SQUARES {
            let sq = Square::from_index(idx);
            if !sq.is_dark() && !self.squares[idx].is_none() {
                return Err(PositionError::PieceOnLightSquare {
                    row: sq.row as usize,
                    col: sq.col as usize,
                });
            }
        }

        for color in [Color::White, Color::Black] {
            let count = self.count(color);
            if count > MAX_PIECES_PER_SIDE {
                return Err(PositionError::TooManyPieces { color, count });
            }
        }

        Ok(())
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.squares[sq.index()]
    }

    /// Raw board edit for setting up positions. Move geometry never changes
    /// square parity, so rule code does not depend on the dark-square
    /// invariant; `validate` checks it.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = piece;
    }

    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        (0..NUM_SQUARES)
            .filter(move |&idx| self.squares[idx].is(color))
            .map(Square::from_index)
    }

    pub fn count(&self, color: Color) -> usize {
        self.squares.iter().filter(|p| p.is(color)).count()
    }

    pub fn count_kings(&self, color: Color) -> usize {
        self.squares
            .iter()
            .filter(|p| p.is(color) && p.is_king())
            .count()
    }

    pub fn total_pieces(&self) -> usize {
        self.squares.iter().filter(|p| !p.is_none()).count()
    }

    pub fn key(&self) -> PositionKey {
        zobrist::position_key(self)
    }

    // ==================== MOVE GENERATION ====================

    /// Every maximal capture sequence for the side to move, before the
    /// majority filter.
    pub fn capture_sequences(&self) -> Vec<CaptureSequence> {
        let mut sequences = Vec::new();
        for sq in self.squares_of(self.side_to_move) {
            sequences.extend(find_capture_sequences(self, sq));
        }
        sequences
    }

    /// Legal captures under the maximum-capture rule. Returns false (and
    /// pushes nothing) when no capture exists.
    pub fn capture_moves_into(&self, moves: &mut MoveList) -> bool {
        let sequences = self.capture_sequences();
        let Some(longest) = sequences.iter().map(CaptureSequence::length).max() else {
            return false;
        };

        for seq in sequences.iter().filter(|s| s.length() == longest) {
            let mv = Move::from(seq);
            // Different paths over the same pieces are one move.
            let duplicate = moves
                .iter()
                .any(|m| m.from == mv.from && m.to == mv.to && m.same_capture_set(&mv));
            if !duplicate {
                moves.push(mv);
            }
        }

        true
    }

    pub fn capture_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.capture_moves_into(&mut moves);
        moves
    }

    pub fn all_legal_moves_into(&self, moves: &mut MoveList) {
        moves.clear();

        if self.capture_moves_into(moves) {
            return;
        }

        for from in self.squares_of(self.side_to_move) {
            if self.piece_at(from).is_king() {
                self.king_slides_into(from, moves);
            } else {
                self.man_steps_into(from, moves);
            }
        }
    }

    pub fn all_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.all_legal_moves_into(&mut moves);
        moves
    }

    /// Legal moves of the piece on `from`, with the global capture rule applied.
    pub fn legal_moves(&self, from: Square) -> MoveList {
        self.all_legal_moves()
            .into_iter()
            .filter(|mv| mv.from == from)
            .collect()
    }

    pub fn is_legal_move(&self, mv: &Move) -> bool {
        self.all_legal_moves().iter().any(|m| {
            m.from == mv.from && m.to == mv.to && m.same_capture_set(mv)
        })
    }

    // ==================== MAKE / UNMAKE ====================

    /// Apply a move in place. The move is trusted to be legal.
    pub fn make_move(&mut self, mv: &Move) -> UndoInfo {
        let mover = self.piece_at(mv.from);
        let mut captured = SmallVec::new();

        for &sq in &mv.captures {
            captured.push(self.piece_at(sq));
            self.set_piece(sq, Piece::Empty);
        }

        let landed = match mover.color() {
            Some(color) if mover.is_man() && mv.to.row == color.promotion_row() => mover.promoted(),
            _ => mover,
        };
        self.set_piece(mv.from, Piece::Empty);
        self.set_piece(mv.to, landed);
        self.side_to_move = self.side_to_move.opposite();

        UndoInfo { mover, captured }
    }

    pub fn unmake_move(&mut self, mv: &Move, undo: UndoInfo) {
        self.side_to_move = self.side_to_move.opposite();
        self.set_piece(mv.to, Piece::Empty);
        self.set_piece(mv.from, undo.mover);
        for (&sq, &piece) in mv.captures.iter().zip(undo.captured.iter()) {
            self.set_piece(sq, piece);
        }
    }

    /// The position after `mv`, leaving `self` untouched.
    pub fn apply(&self, mv: &Move) -> Position {
        let mut next = *self;
        next.make_move(mv);
        next
    }

    /// Colors swapped and the board rotated half a turn, so every rule and
    /// evaluation term maps onto its counterpart for the other side.
    pub fn mirrored(&self) -> Position {
        let mut mirrored = Position::empty(self.side_to_move.opposite());
        for idx in 0..NUM_SQUARES {
            let sq = Square::from_index(idx);
            mirrored.set_piece(sq.flipped(), self.squares[idx].swapped());
        }
        mirrored
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.squares[row * BOARD_SIZE + col])?;
            }
            writeln!(f)?;
        }
        write!(f, "{:?} to move", self.side_to_move)
    }
}
