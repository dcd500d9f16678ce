use smallvec::SmallVec;
use std::fmt;

/*-------ARCHITECTURE--------*/

// Squares are (row, col) on a 10x10 grid, 0-indexed.
// Row 0 is Black's home rank, row 9 is White's home rank.
// Only dark squares, (row + col) odd, are ever occupied.

pub const BOARD_SIZE: usize = 10;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// The four diagonal directions as (row delta, col delta).
pub const DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Captures recorded inline before spilling to the heap.
pub type CaptureList = SmallVec<[Square; 12]>;

pub type MoveList = SmallVec<[Move; 32]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub fn is_on_board(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Neighbouring square `steps` away along a direction, if it is on the board.
    #[inline]
    pub fn offset(&self, (dr, dc): (i8, i8), steps: i8) -> Option<Square> {
        let row = self.row as i8 + dr * steps;
        let col = self.col as i8 + dc * steps;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Rotate by 180 degrees.
    pub fn flipped(&self) -> Square {
        Square::new(9 - self.row, 9 - self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A legal move: a plain step/slide when `captures` is empty, otherwise one
/// fully resolved capture chain. Promotion is implied by the landing square.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captures: CaptureList,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captures: CaptureList::new(),
        }
    }

    pub fn with_captures(from: Square, to: Square, captures: CaptureList) -> Self {
        Self { from, to, captures }
    }

    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }

    /// True when both moves take the same pieces, in any order.
    pub fn same_capture_set(&self, other: &Move) -> bool {
        if self.captures.len() != other.captures.len() {
            return false;
        }
        let mut a = self.captures.clone();
        let mut b = other.captures.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

impl From<&CaptureSequence> for Move {
    fn from(seq: &CaptureSequence) -> Self {
        Move::with_captures(seq.from, seq.to, seq.captures.clone())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// A maximal jump chain produced by the capture resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSequence {
    pub from: Square,
    pub to: Square,
    /// Every square the piece stands on, including `from` and `to`.
    pub path: SmallVec<[Square; 13]>,
    /// Squares of removed pieces, in capture order.
    pub captures: CaptureList,
}

impl CaptureSequence {
    pub fn length(&self) -> usize {
        self.captures.len()
    }
}
