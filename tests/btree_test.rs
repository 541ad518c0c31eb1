//! Classic B-Tree integration tests.
//!
//! Exercises the public API end to end: construction, the t = 3 reference
//! walk-through, bulk workloads, and randomized model checks against
//! `std::collections::BTreeSet`.

use std::collections::BTreeSet;

use proptest::prelude::*;

use ordindex::{BTree, Error};

fn build(t: usize, keys: &[u32]) -> BTree<u32> {
    let mut tree = BTree::new(t).unwrap();
    for &key in keys {
        tree.insert(key);
    }
    tree
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_rejects_degree_below_two() {
    for t in [0, 1] {
        assert_eq!(BTree::<u32>::new(t).unwrap_err(), Error::InvalidMinDegree(t));
    }
}

#[test]
fn test_error_message_names_the_floor() {
    let err = BTree::<u32>::new(1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid minimum degree 1: must be at least 2"
    );
}

// ============================================================================
// Reference scenario (t = 3)
// ============================================================================

#[test]
fn test_insert_search_remove_walkthrough() {
    let mut tree = build(3, &[10, 20, 5, 6, 12, 30, 7, 17]);

    assert!(tree.contains(&12));
    assert!(!tree.contains(&40));

    // Absent-key removal is a silent no-op.
    assert!(!tree.remove(&15));
    assert_eq!(tree.len(), 8);

    assert!(tree.remove(&6));
    assert!(!tree.contains(&6));
    for key in [10, 20, 5, 12, 30, 7, 17] {
        assert!(tree.contains(&key));
    }
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_double_insert_and_double_remove() {
    let mut tree = build(2, &[3, 1, 4, 1, 5, 9, 2, 6]); // 1 repeats
    assert_eq!(tree.len(), 7);
    let before = tree.in_order_keys();

    assert!(!tree.insert(9));
    assert_eq!(tree.in_order_keys(), before);

    assert!(tree.remove(&9));
    assert!(!tree.remove(&9));
    assert_eq!(tree.len(), 6);
}

// ============================================================================
// Bulk workloads
// ============================================================================

#[test]
fn test_bulk_ascending_then_drain_descending() {
    let mut tree = build(2, &(0..512).collect::<Vec<_>>());
    assert_eq!(tree.len(), 512);
    assert_eq!(tree.first(), Some(&0));
    assert_eq!(tree.last(), Some(&511));

    for key in (0..512).rev() {
        assert!(tree.remove(&key));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 1);
}

#[test]
fn test_interleaved_insert_remove() {
    let mut tree = BTree::new(3).unwrap();
    let mut model = BTreeSet::new();

    // Deterministic but scrambled sequence.
    for i in 0u32..600 {
        let key = i.wrapping_mul(2_654_435_761) % 1_000;
        if i % 3 == 2 {
            assert_eq!(tree.remove(&key), model.remove(&key));
        } else {
            assert_eq!(tree.insert(key), model.insert(key));
        }
    }

    assert_eq!(tree.len(), model.len());
    assert_eq!(tree.in_order_keys(), model.into_iter().collect::<Vec<_>>());
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_dump_conserves_keys_and_depths() {
    let tree = build(2, &(0..100).collect::<Vec<_>>());
    let dump = tree.level_order_dump();

    // The dump starts at the root and never skips a level.
    assert_eq!(dump[0].0, 0);
    let max_depth = dump.iter().map(|(depth, _)| *depth).max().unwrap();
    assert_eq!(max_depth + 1, tree.height());

    // Every key appears exactly once somewhere in the tree.
    let mut all: Vec<u32> = dump.into_iter().flat_map(|(_, keys)| keys).collect();
    all.sort_unstable();
    assert_eq!(all, tree.in_order_keys());
}

#[test]
fn test_stats_track_inserts_and_splits() {
    let tree = build(2, &(0..64).collect::<Vec<_>>());
    let stats = tree.stats();
    assert_eq!(stats.inserts, 64);
    assert!(stats.splits > 0);
    assert_eq!(stats.rebalances(), stats.splits);
}

// ============================================================================
// Randomized model checks
// ============================================================================

proptest! {
    #[test]
    fn prop_public_api_matches_model(
        t in 2usize..6,
        ops in proptest::collection::vec((any::<bool>(), 0u16..300), 1..300),
    ) {
        let mut tree = BTree::new(t).unwrap();
        let mut model = BTreeSet::new();

        for (is_insert, key) in ops {
            if is_insert {
                prop_assert_eq!(tree.insert(key), model.insert(key));
            } else {
                prop_assert_eq!(tree.remove(&key), model.remove(&key));
            }
        }

        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(tree.is_empty(), model.is_empty());
        prop_assert_eq!(tree.first(), model.first());
        prop_assert_eq!(tree.last(), model.last());

        let keys = tree.in_order_keys();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(keys, model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_every_inserted_key_is_found(
        keys in proptest::collection::btree_set(0u32..50_000, 1..200),
        t in 2usize..8,
    ) {
        let keys: Vec<u32> = keys.into_iter().collect();
        let mut tree = BTree::new(t).unwrap();
        for &key in &keys {
            prop_assert!(tree.insert(key));
        }
        for &key in &keys {
            prop_assert!(tree.contains(&key));
        }
        prop_assert!(!tree.contains(&50_000));
    }
}
