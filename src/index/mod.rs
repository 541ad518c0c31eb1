//! Index layer: ordered key storage in two swappable layouts.
//!
//! Both trees share the same invariants and point-operation API; they differ
//! in where keys live:
//! - [`BTree`] - classic layout, keys at every level
//! - [`BPlusTree`] - leaf-chained layout, keys only in leaves, linked for
//!   range scans
//!
//! Pick [`BPlusTree`] when range queries matter; pick [`BTree`] when point
//! lookups dominate and hits at upper levels should end the descent early.

pub mod bplus;
pub mod btree;
pub mod stats;

pub use bplus::BPlusTree;
pub use btree::BTree;
pub use stats::IndexStats;
