use crate::game_repr::zobrist::PositionKey;
use crate::game_repr::Move;
use std::collections::HashMap;

/// Node type for transposition table entries
///
/// This is crucial for alpha-beta pruning:
/// - Exact: The exact score for this position
/// - LowerBound: Score is at least this value (beta cutoff)
/// - UpperBound: Score is at most this value (alpha cutoff)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Exact score - position was fully searched
    Exact,
    /// Lower bound - beta cutoff occurred
    LowerBound,
    /// Upper bound - alpha cutoff occurred (all moves failed low)
    UpperBound,
}

/// Entry in the transposition table
#[derive(Debug, Clone)]
pub struct TranspositionTableEntry {
    /// Zobrist key of the position
    pub key: PositionKey,
    /// Search depth when this position was evaluated
    pub depth: u8,
    /// Evaluation score (centipawns); mate scores are stored relative to
    /// this node, see `score_to_tt`
    pub score: i32,
    /// Best move found in this position
    pub best_move: Option<Move>,
    /// Type of node (exact, lower bound, upper bound)
    pub node_type: NodeType,
}

/// Transposition Table for storing previously evaluated positions
///
/// Keyed by the 32-bit Zobrist key. Two positions sharing a key share an
/// entry; that collision rate is accepted.
pub struct TranspositionTable {
    /// HashMap storing entries by key
    table: HashMap<PositionKey, TranspositionTableEntry>,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Statistics: number of successful probes
    pub hits: u64,
    /// Statistics: number of failed probes
    pub misses: u64,
}

impl TranspositionTable {
    /// Create a transposition table with default size (1 million entries)
    pub fn new() -> Self {
        Self::with_capacity(1_000_000)
    }

    /// Create a new transposition table with specified maximum size
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            table: HashMap::with_capacity(max_size.min(100_000)),
            max_size,
            hits: 0,
            misses: 0,
        }
    }

    /// Probe the transposition table for a position
    ///
    /// Returns the entry if found, None otherwise.
    /// Updates hit/miss statistics.
    pub fn probe(&mut self, key: PositionKey) -> Option<&TranspositionTableEntry> {
        match self.table.get(&key) {
            Some(entry) => {
                self.hits += 1;
                Some(entry)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store an entry in the transposition table
    ///
    /// An existing entry is replaced when the new one is at least as deep,
    /// or exact where the old one was a bound. A full table only accepts
    /// updates to keys it already holds.
    pub fn store(&mut self, entry: TranspositionTableEntry) {
        if let Some(existing) = self.table.get(&entry.key) {
            let should_replace = entry.depth >= existing.depth
                || (entry.node_type == NodeType::Exact && existing.node_type != NodeType::Exact);
            if !should_replace {
                return;
            }
        } else if self.table.len() >= self.max_size {
            return;
        }

        self.table.insert(entry.key, entry);
    }

    /// Clear the transposition table
    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get current table size
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Get hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Square;

    fn entry(key: PositionKey, depth: u8, score: i32, node_type: NodeType) -> TranspositionTableEntry {
        TranspositionTableEntry {
            key,
            depth,
            score,
            best_move: None,
            node_type,
        }
    }

    #[test]
    fn test_transposition_table_store_and_probe() {
        let mut table = TranspositionTable::with_capacity(100);
        let mv = Move::new(Square::new(6, 1), Square::new(5, 0));

        table.store(TranspositionTableEntry {
            best_move: Some(mv.clone()),
            ..entry(0x1234_5678, 5, 100, NodeType::Exact)
        });

        let retrieved = table.probe(0x1234_5678).unwrap();
        assert_eq!(retrieved.depth, 5);
        assert_eq!(retrieved.score, 100);
        assert_eq!(retrieved.best_move, Some(mv));
        assert_eq!(retrieved.node_type, NodeType::Exact);
    }

    #[test]
    fn test_transposition_table_replacement() {
        let mut table = TranspositionTable::with_capacity(100);

        table.store(entry(7, 3, 50, NodeType::LowerBound));
        table.store(entry(7, 5, 100, NodeType::Exact));
        assert_eq!(table.probe(7).unwrap().score, 100);

        // Shallower bound does not replace a deeper exact entry
        table.store(entry(7, 2, -40, NodeType::UpperBound));
        assert_eq!(table.probe(7).unwrap().depth, 5);
    }

    #[test]
    fn test_full_table_rejects_new_keys() {
        let mut table = TranspositionTable::with_capacity(1);

        table.store(entry(1, 1, 0, NodeType::Exact));
        table.store(entry(2, 9, 0, NodeType::Exact));

        assert_eq!(table.size(), 1);
        assert!(table.probe(2).is_none());
    }

    #[test]
    fn test_transposition_table_clear() {
        let mut table = TranspositionTable::with_capacity(100);
        table.store(entry(123, 5, 100, NodeType::Exact));
        table.probe(123);

        table.clear();

        assert_eq!(table.size(), 0);
        assert_eq!(table.hits, 0);
        assert_eq!(table.misses, 0);
    }

    #[test]
    fn test_hit_rate() {
        let mut table = TranspositionTable::with_capacity(100);
        table.store(entry(123, 5, 100, NodeType::Exact));

        table.probe(123);
        table.probe(456);

        assert_eq!(table.hit_rate(), 0.5);
    }
}
