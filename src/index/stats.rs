//! Structural-operation statistics tracking.

use std::fmt;

/// Statistics tracked by an index tree.
///
/// Counters cover the mutations that change tree shape, not just content:
/// splits grow the tree, merges shrink it, and borrows redistribute keys
/// between siblings without changing node count. A tree that splits rarely
/// relative to its inserts is absorbing keys into existing slack.
///
/// The engine is single-threaded, so the fields are plain `u64`s and the
/// struct doubles as its own snapshot: [`stats`](crate::BTree::stats)
/// returns it by value, safe to print, compare, or diff across a workload.
///
/// # Example
/// ```
/// use ordindex::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// for key in 0..16 {
///     tree.insert(key);
/// }
/// let stats = tree.stats();
/// assert_eq!(stats.inserts, 16);
/// assert!(stats.splits > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStats {
    /// Number of keys actually inserted (duplicates excluded).
    pub inserts: u64,

    /// Number of keys actually removed (absent keys excluded).
    pub removes: u64,

    /// Number of node splits performed during inserts.
    pub splits: u64,

    /// Number of node merges performed during removes.
    pub merges: u64,

    /// Number of key borrows (sibling rotations) performed during removes.
    pub borrows: u64,
}

impl IndexStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of structural rebalancing events (splits + merges + borrows).
    pub fn rebalances(&self) -> u64 {
        self.splits + self.merges + self.borrows
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IndexStats {{ inserts: {}, removes: {}, splits: {}, merges: {}, borrows: {} }}",
            self.inserts, self.removes, self.splits, self.merges, self.borrows
        )
    }
}
