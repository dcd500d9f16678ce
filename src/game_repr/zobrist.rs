use super::{Color, Position, NUM_SQUARES};
use once_cell::sync::OnceCell;

/// 32-bit position fingerprint.
pub type PositionKey = u32;

/// Zobrist keys for a 10x10 draughts board.
///
/// One 31-bit random number per (square, piece kind) pair and one for the
/// side to move. Keys are drawn from a fixed seed so hashes are identical
/// across runs; they are a fingerprint, not a security measure.
pub struct ZobristKeys {
    /// [square][kind] - kind follows `Piece::kind_index`
    pub pieces: [[u32; 4]; NUM_SQUARES],
    /// Mixed in when White is to move
    pub white_to_move: u32,
}

impl ZobristKeys {
    fn generate() -> Self {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x1d2a_7c3b_5e0f_9a41);

        let mut pieces = [[0u32; 4]; NUM_SQUARES];
        for square in &mut pieces {
            for kind in square {
                *kind = rng.gen::<u32>() & 0x7FFF_FFFF;
            }
        }

        Self {
            pieces,
            white_to_move: rng.gen::<u32>() & 0x7FFF_FFFF,
        }
    }
}

static ZOBRIST: OnceCell<ZobristKeys> = OnceCell::new();

/// Build the process-wide key table. Engine entry points call this once
/// during startup; repeated calls return the same table.
pub fn init() -> &'static ZobristKeys {
    ZOBRIST.get_or_init(ZobristKeys::generate)
}

/// The table built by `init`. A caller that skipped `init` still gets the
/// same table, built on this first access.
#[inline]
pub fn keys() -> &'static ZobristKeys {
    match ZOBRIST.get() {
        Some(keys) => keys,
        None => init(),
    }
}

/// Key of a position, recomputed from scratch.
pub fn position_key(pos: &Position) -> PositionKey {
    let keys = keys();
    let mut key = 0u32;

    for (idx, piece) in pos.squares.iter().enumerate() {
        if let Some(kind) = piece.kind_index() {
            key ^= keys.pieces[idx][kind];
        }
    }

    if pos.side_to_move == Color::White {
        key ^= keys.white_to_move;
    }

    key
}
