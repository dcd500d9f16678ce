// Capture Resolver
//
// Exhaustive depth-first backtracking over the four diagonals, producing
// every maximal jump chain that starts on one square. The resolver owns a
// scratch copy of the board for the duration of one call; every jump is
// executed on that copy and undone on the way back up, so nothing it does is
// observable from outside.
//
// Men jump an adjacent enemy onto the empty square directly behind it, in
// any of the four directions. Kings fly: the first occupied square along a
// diagonal must be an enemy that has not been taken yet in this chain, and
// every empty square of the run behind it is a separate landing branch.
//
// Taken pieces are lifted off the scratch board immediately, so a king may
// later cross their squares, but the square is remembered in `captures` and
// can never be taken a second time.

use super::{CaptureList, CaptureSequence, Color, Piece, Position, Square, DIRECTIONS, NUM_SQUARES};
use smallvec::SmallVec;

/// Every maximal capture sequence available to the piece on `from`.
///
/// # Panics
///
/// Panics if `from` does not hold a piece of the side to move.
pub fn find_capture_sequences(pos: &Position, from: Square) -> Vec<CaptureSequence> {
    let mover = pos.piece_at(from);
    assert!(
        mover.is(pos.side_to_move),
        "no piece of the side to move on {} (found {:?})",
        from,
        mover
    );

    let mut resolver = CaptureResolver::new(pos, from);
    resolver.search(from);
    resolver.found
}

/// Undo record for a single executed jump.
struct Jump {
    from: Square,
    over: Square,
    land: Square,
    victim: Piece,
}

struct CaptureResolver {
    board: [Piece; NUM_SQUARES],
    enemy: Color,
    mover: Piece,
    path: SmallVec<[Square; 13]>,
    captures: CaptureList,
    found: Vec<CaptureSequence>,
}

impl CaptureResolver {
    fn new(pos: &Position, from: Square) -> Self {
        let mover = pos.piece_at(from);
        let mut path = SmallVec::new();
        path.push(from);

        Self {
            board: pos.squares,
            enemy: pos.side_to_move.opposite(),
            mover,
            path,
            captures: CaptureList::new(),
            found: Vec::new(),
        }
    }

    /// Extend the chain from `at`; emit it when no further jump exists.
    fn search(&mut self, at: Square) {
        let extended = if self.mover.is_king() {
            self.king_jumps(at)
        } else {
            self.man_jumps(at)
        };

        if !extended && !self.captures.is_empty() {
            self.found.push(CaptureSequence {
                from: self.path[0],
                to: at,
                path: self.path.clone(),
                captures: self.captures.clone(),
            });
        }
    }

    fn man_jumps(&mut self, at: Square) -> bool {
        let mut extended = false;

        for dir in DIRECTIONS {
            let (Some(over), Some(land)) = (at.offset(dir, 1), at.offset(dir, 2)) else {
                continue;
            };
            if !self.can_take(over) || !self.board[land.index()].is_none() {
                continue;
            }

            extended = true;
            self.jump(at, over, land);
        }

        extended
    }

    fn king_jumps(&mut self, at: Square) -> bool {
        let mut extended = false;

        for dir in DIRECTIONS {
            // Slide over the empty run up to the first occupied square.
            let mut step = 1;
            let over = loop {
                match at.offset(dir, step) {
                    Some(sq) if self.board[sq.index()].is_none() => step += 1,
                    other => break other,
                }
            };

            let Some(over) = over else {
                continue;
            };
            if !self.can_take(over) {
                continue;
            }

            // Every empty square behind the victim is its own branch. A piece
            // directly behind the victim leaves the run empty.
            let mut land_step = 1;
            while let Some(land) = over.offset(dir, land_step) {
                if !self.board[land.index()].is_none() {
                    break;
                }
                extended = true;
                self.jump(at, over, land);
                land_step += 1;
            }
        }

        extended
    }

    #[inline]
    fn can_take(&self, over: Square) -> bool {
        self.board[over.index()].is(self.enemy) && !self.captures.contains(&over)
    }

    fn jump(&mut self, from: Square, over: Square, land: Square) {
        let undo = self.execute(from, over, land);
        self.search(land);
        self.undo(undo);
    }

    fn execute(&mut self, from: Square, over: Square, land: Square) -> Jump {
        let victim = self.board[over.index()];

        self.board[from.index()] = Piece::Empty;
        self.board[over.index()] = Piece::Empty;
        self.board[land.index()] = self.mover;
        self.path.push(land);
        self.captures.push(over);

        Jump { from, over, land, victim }
    }

    fn undo(&mut self, jump: Jump) {
        self.captures.pop();
        self.path.pop();
        self.board[jump.land.index()] = Piece::Empty;
        self.board[jump.over.index()] = jump.victim;
        self.board[jump.from.index()] = self.mover;
    }
}
