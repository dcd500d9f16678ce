use super::zobrist::PositionKey;
use super::Position;
use std::collections::HashMap;

/// Default number of keys kept before further records are dropped.
pub const REPETITION_CAPACITY: usize = 1024;

/// Occurrences that make a draw.
const REPETITION_DRAW_COUNT: u32 = 3;

/// Bounded history of committed position keys with occurrence counts.
///
/// Once the history is full new keys are no longer recorded; they are only
/// counted in `overflow` so that `pop` stays paired with `record`. The sum
/// of all counts always equals `history.len()`.
#[derive(Debug, Clone)]
pub struct RepetitionTracker {
    history: Vec<PositionKey>,
    counts: HashMap<PositionKey, u32>,
    capacity: usize,
    overflow: usize,
}

impl RepetitionTracker {
    pub fn new() -> Self {
        Self::with_capacity(REPETITION_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: Vec::with_capacity(capacity.min(REPETITION_CAPACITY)),
            counts: HashMap::new(),
            capacity,
            overflow: 0,
        }
    }

    /// Seed a tracker from keys recorded elsewhere, oldest first.
    pub fn from_keys<I: IntoIterator<Item = PositionKey>>(keys: I) -> Self {
        let mut tracker = Self::new();
        for key in keys {
            tracker.record_key(key);
        }
        tracker
    }

    pub fn record(&mut self, pos: &Position) -> bool {
        self.record_key(pos.key())
    }

    /// Returns false when the history is full and the key was not kept.
    pub fn record_key(&mut self, key: PositionKey) -> bool {
        if self.history.len() >= self.capacity {
            self.overflow += 1;
            return false;
        }

        self.history.push(key);
        *self.counts.entry(key).or_insert(0) += 1;
        true
    }

    /// Undo the most recent `record`.
    pub fn pop(&mut self) -> Option<PositionKey> {
        if self.overflow > 0 {
            self.overflow -= 1;
            return None;
        }

        let key = self.history.pop()?;
        if let Some(count) = self.counts.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&key);
            }
        }
        Some(key)
    }

    pub fn count(&self, key: PositionKey) -> u32 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    pub fn is_draw_by_repetition(&self, pos: &Position) -> bool {
        self.is_key_repeated(pos.key())
    }

    pub fn is_key_repeated(&self, key: PositionKey) -> bool {
        self.count(key) >= REPETITION_DRAW_COUNT
    }

    pub fn keys(&self) -> &[PositionKey] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.counts.clear();
        self.overflow = 0;
    }
}

impl Default for RepetitionTracker {
    fn default() -> Self {
        Self::new()
    }
}
