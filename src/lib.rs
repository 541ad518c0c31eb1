//! ordindex - An in-memory ordered index engine with swappable B-tree layouts.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         ordindex                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │        Index Layer (index/)  [Swappable Layout]     │   │
//! │  │                                                     │   │
//! │  │   BTree ───── keys at every level, early hits       │   │
//! │  │   BPlusTree ─ keys in chained leaves, range scans   │   │
//! │  │                                                     │   │
//! │  │   shared: split / merge / borrow rebalancing,       │   │
//! │  │           IndexStats counters                       │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                              ↓                              │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │           Common Layer (common/)                    │   │
//! │  │     config (degree bounds) + Error / Result         │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (config constants, Error, Result)
//! - [`index`] - The two tree layouts and their statistics
//!
//! # Quick Start
//! ```
//! use ordindex::BPlusTree;
//!
//! let mut index = BPlusTree::new(3)?;
//! for key in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     index.insert(key);
//! }
//!
//! assert!(index.contains(&12));
//! assert_eq!(index.range_query(&6, &17), vec![6, 7, 10, 12, 17]);
//! # Ok::<(), ordindex::Error>(())
//! ```
//!
//! # Concurrency
//! The engine is single-threaded and synchronous: every operation completes
//! before returning, using recursion bounded by the tree height. There is no
//! internal locking; callers needing shared access serialize externally.

// Core modules
pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE_FLOOR};
pub use common::{Error, Result};

pub use index::{BPlusTree, BTree, IndexStats};
