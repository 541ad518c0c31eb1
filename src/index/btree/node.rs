//! Classic B-Tree node and structural rebalancing machinery.
//!
//! A [`Node`] is a tagged variant: leaves hold only keys, internal nodes hold
//! keys plus one more child than they have keys. The variant (rather than an
//! `is_leaf` flag with unused fields) lets the type system rule out touching
//! children on a leaf.
//!
//! Ownership is strictly top-down: a node exclusively owns its children and
//! there are no parent back-pointers. All fix-ups run on the way *down*
//! ([`Node::fill`] restores the minimum-key invariant before descending), so
//! no operation ever needs to revisit an ancestor.

use std::mem;

use crate::common::config::max_keys;
use crate::index::stats::IndexStats;

/// A single B-Tree node.
///
/// Key count bounds for minimum degree `t`:
/// - every node holds at most `2t - 1` keys;
/// - every node except the root holds at least `t - 1` keys after any
///   completed operation;
/// - an internal node with `m` keys owns exactly `m + 1` children, where
///   child `i` covers the open key range between `keys[i-1]` and `keys[i]`.
#[derive(Debug)]
pub(crate) enum Node<K> {
    Leaf {
        keys: Vec<K>,
    },
    Internal {
        keys: Vec<K>,
        children: Vec<Node<K>>,
    },
}

impl<K: Ord + Clone> Node<K> {
    /// Create an empty leaf.
    pub(crate) fn new_leaf() -> Self {
        Node::Leaf { keys: Vec::new() }
    }

    /// The node's keys, regardless of variant.
    pub(crate) fn keys(&self) -> &[K] {
        match self {
            Node::Leaf { keys } | Node::Internal { keys, .. } => keys,
        }
    }

    pub(crate) fn key_count(&self) -> usize {
        self.keys().len()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Index of the first key `>=` the target, or `key_count()` if all keys
    /// are smaller. Doubles as the descent child index.
    fn lower_bound(&self, key: &K) -> usize {
        self.keys().partition_point(|k| k < key)
    }

    /// Smallest key in the subtree rooted here (leftmost leaf's first key).
    pub(crate) fn min_key(&self) -> &K {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { keys } => {
                    return keys.first().expect("subtree leaf holds at least one key")
                }
                Node::Internal { children, .. } => {
                    node = children.first().expect("internal node has children")
                }
            }
        }
    }

    /// Largest key in the subtree rooted here (rightmost leaf's last key).
    pub(crate) fn max_key(&self) -> &K {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { keys } => {
                    return keys.last().expect("subtree leaf holds at least one key")
                }
                Node::Internal { children, .. } => {
                    node = children.last().expect("internal node has children")
                }
            }
        }
    }

    /// Number of levels below (and including) this node, following the
    /// leftmost spine. All spines have equal length by the depth invariant.
    pub(crate) fn height(&self) -> usize {
        let mut levels = 1;
        let mut node = self;
        while let Node::Internal { children, .. } = node {
            levels += 1;
            node = children.first().expect("internal node has children");
        }
        levels
    }

    /// Point search, iterative: an exact match may sit at any level.
    pub(crate) fn contains(&self, key: &K) -> bool {
        let mut node = self;
        loop {
            let idx = node.lower_bound(key);
            match node {
                Node::Leaf { keys } => return idx < keys.len() && keys[idx] == *key,
                Node::Internal { keys, children } => {
                    if idx < keys.len() && keys[idx] == *key {
                        return true;
                    }
                    node = &children[idx];
                }
            }
        }
    }

    /// Append the subtree's keys to `out` in ascending order.
    pub(crate) fn collect_keys(&self, out: &mut Vec<K>) {
        match self {
            Node::Leaf { keys } => out.extend(keys.iter().cloned()),
            Node::Internal { keys, children } => {
                for (i, key) in keys.iter().enumerate() {
                    children[i].collect_keys(out);
                    out.push(key.clone());
                }
                children[keys.len()].collect_keys(out);
            }
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert into a subtree whose root is known to be non-full.
    ///
    /// Full children are split *before* descending into them, so every
    /// recursive call re-establishes the precondition. Returns `false`
    /// without modifying anything when the key is already present; the
    /// duplicate is rejected at the first node where an equal key is seen,
    /// including the freshly promoted separator after a split.
    pub(crate) fn insert_non_full(&mut self, key: K, t: usize, stats: &mut IndexStats) -> bool {
        let idx = self.lower_bound(&key);
        match self {
            Node::Leaf { keys } => {
                if idx < keys.len() && keys[idx] == key {
                    return false;
                }
                keys.insert(idx, key);
                true
            }
            Node::Internal { keys, children } => {
                if idx < keys.len() && keys[idx] == key {
                    return false;
                }
                let mut idx = idx;
                if children[idx].key_count() == max_keys(t) {
                    Self::split_child(keys, children, idx, t, stats);
                    // The promoted middle key landed at keys[idx]; re-resolve
                    // which half the new key belongs to.
                    if key > keys[idx] {
                        idx += 1;
                    } else if key == keys[idx] {
                        return false;
                    }
                }
                children[idx].insert_non_full(key, t, stats)
            }
        }
    }

    /// Split the full child at `idx` into two minimum-degree siblings.
    ///
    /// The child keeps its lower `t - 1` keys, the new right sibling takes
    /// the upper `t - 1` (plus the upper `t` children when internal), and
    /// the middle key moves up into this node at `idx`.
    pub(crate) fn split_child(
        parent_keys: &mut Vec<K>,
        parent_children: &mut Vec<Node<K>>,
        idx: usize,
        t: usize,
        stats: &mut IndexStats,
    ) {
        let child = &mut parent_children[idx];
        debug_assert_eq!(child.key_count(), max_keys(t));

        let (sibling, middle) = match child {
            Node::Leaf { keys } => {
                let upper = keys.split_off(t);
                let middle = keys.pop().expect("full leaf has a middle key");
                (Node::Leaf { keys: upper }, middle)
            }
            Node::Internal { keys, children } => {
                let upper_keys = keys.split_off(t);
                let upper_children = children.split_off(t);
                let middle = keys.pop().expect("full node has a middle key");
                (
                    Node::Internal {
                        keys: upper_keys,
                        children: upper_children,
                    },
                    middle,
                )
            }
        };

        parent_keys.insert(idx, middle);
        parent_children.insert(idx + 1, sibling);
        stats.splits += 1;
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// Remove a key from the subtree rooted here.
    ///
    /// Callers guarantee this node holds at least `t` keys (or is the root),
    /// so one key can disappear from it without violating the minimum. The
    /// guarantee is pushed downward by [`Node::fill`] before every descent.
    pub(crate) fn remove(&mut self, key: &K, t: usize, stats: &mut IndexStats) -> bool {
        let idx = self.lower_bound(key);
        match self {
            Node::Leaf { keys } => {
                if idx < keys.len() && keys[idx] == *key {
                    keys.remove(idx);
                    true
                } else {
                    // Absent key: nothing to do.
                    false
                }
            }
            Node::Internal { keys, children } => {
                if idx < keys.len() && keys[idx] == *key {
                    Self::remove_separator(keys, children, idx, t, stats)
                } else {
                    let idx = if children[idx].key_count() < t {
                        Self::fill(keys, children, idx, t, stats)
                    } else {
                        idx
                    };
                    children[idx].remove(key, t, stats)
                }
            }
        }
    }

    /// Remove the key stored at `keys[idx]` of an internal node.
    ///
    /// The key cannot simply be deleted in place: it separates two child
    /// ranges. It is replaced by its in-order predecessor or successor when
    /// the corresponding child can spare a key, otherwise the key and both
    /// neighbouring children are merged and the deletion recurses.
    fn remove_separator(
        keys: &mut Vec<K>,
        children: &mut Vec<Node<K>>,
        idx: usize,
        t: usize,
        stats: &mut IndexStats,
    ) -> bool {
        if children[idx].key_count() >= t {
            let pred = children[idx].max_key().clone();
            keys[idx] = pred;
            children[idx].remove(&keys[idx], t, stats)
        } else if children[idx + 1].key_count() >= t {
            let succ = children[idx + 1].min_key().clone();
            keys[idx] = succ;
            children[idx + 1].remove(&keys[idx], t, stats)
        } else {
            // Both neighbours at minimum: the separator moves down into the
            // merged node, where it can be deleted as an ordinary key.
            let target = keys[idx].clone();
            Self::merge(keys, children, idx, stats);
            children[idx].remove(&target, t, stats)
        }
    }

    /// Ensure the child at `idx` holds at least `t` keys before a descent.
    ///
    /// Borrows from the left sibling first, then the right, and merges when
    /// neither can spare a key (with the right sibling, unless the child is
    /// the last one). Returns the child's index afterwards — one lower when
    /// the child was folded into its left sibling.
    pub(crate) fn fill(
        parent_keys: &mut Vec<K>,
        parent_children: &mut Vec<Node<K>>,
        idx: usize,
        t: usize,
        stats: &mut IndexStats,
    ) -> usize {
        if idx > 0 && parent_children[idx - 1].key_count() >= t {
            Self::borrow_from_prev(parent_keys, parent_children, idx, stats);
            idx
        } else if idx + 1 < parent_children.len() && parent_children[idx + 1].key_count() >= t {
            Self::borrow_from_next(parent_keys, parent_children, idx, stats);
            idx
        } else if idx + 1 < parent_children.len() {
            Self::merge(parent_keys, parent_children, idx, stats);
            idx
        } else {
            Self::merge(parent_keys, parent_children, idx - 1, stats);
            idx - 1
        }
    }

    /// Rotate one key from the left sibling into the child at `idx`.
    ///
    /// The separator at `idx - 1` drops into the child's front; the left
    /// sibling's last key replaces it. Internal siblings hand over their
    /// last child pointer along with the key.
    fn borrow_from_prev(
        parent_keys: &mut [K],
        parent_children: &mut [Node<K>],
        idx: usize,
        stats: &mut IndexStats,
    ) {
        let (left_half, right_half) = parent_children.split_at_mut(idx);
        let left = &mut left_half[idx - 1];
        let child = &mut right_half[0];
        debug_assert_eq!(left.is_leaf(), child.is_leaf());

        let moved_up = match left {
            Node::Leaf { keys } | Node::Internal { keys, .. } => {
                keys.pop().expect("donating sibling has a key to spare")
            }
        };
        let sep_down = mem::replace(&mut parent_keys[idx - 1], moved_up);
        match child {
            Node::Leaf { keys } | Node::Internal { keys, .. } => keys.insert(0, sep_down),
        }

        if let (
            Node::Internal {
                children: left_children,
                ..
            },
            Node::Internal {
                children: child_children,
                ..
            },
        ) = (left, child)
        {
            let grandchild = left_children
                .pop()
                .expect("donating node has a child to spare");
            child_children.insert(0, grandchild);
        }
        stats.borrows += 1;
    }

    /// Rotate one key from the right sibling into the child at `idx`.
    ///
    /// Mirror image of [`Node::borrow_from_prev`].
    fn borrow_from_next(
        parent_keys: &mut [K],
        parent_children: &mut [Node<K>],
        idx: usize,
        stats: &mut IndexStats,
    ) {
        let (left_half, right_half) = parent_children.split_at_mut(idx + 1);
        let child = &mut left_half[idx];
        let right = &mut right_half[0];
        debug_assert_eq!(child.is_leaf(), right.is_leaf());

        let moved_up = match right {
            Node::Leaf { keys } | Node::Internal { keys, .. } => keys.remove(0),
        };
        let sep_down = mem::replace(&mut parent_keys[idx], moved_up);
        match child {
            Node::Leaf { keys } | Node::Internal { keys, .. } => keys.push(sep_down),
        }

        if let (
            Node::Internal {
                children: child_children,
                ..
            },
            Node::Internal {
                children: right_children,
                ..
            },
        ) = (child, right)
        {
            child_children.push(right_children.remove(0));
        }
        stats.borrows += 1;
    }

    /// Merge the child at `idx`, the separator at `idx`, and the child at
    /// `idx + 1` into a single node at `idx`.
    ///
    /// The separator moves down between the two key runs; the right sibling
    /// is destroyed. The parent loses one key, which may push *it* below the
    /// minimum — callers rebalance ancestors on the way down, never after
    /// the fact.
    pub(crate) fn merge(
        parent_keys: &mut Vec<K>,
        parent_children: &mut Vec<Node<K>>,
        idx: usize,
        stats: &mut IndexStats,
    ) {
        let sep = parent_keys.remove(idx);
        let right = parent_children.remove(idx + 1);
        let left = &mut parent_children[idx];
        debug_assert_eq!(left.is_leaf(), right.is_leaf());

        match (left, right) {
            (Node::Leaf { keys: left_keys }, Node::Leaf { keys: right_keys }) => {
                left_keys.push(sep);
                left_keys.extend(right_keys);
            }
            (
                Node::Internal {
                    keys: left_keys,
                    children: left_children,
                },
                Node::Internal {
                    keys: right_keys,
                    children: right_children,
                },
            ) => {
                left_keys.push(sep);
                left_keys.extend(right_keys);
                left_children.extend(right_children);
            }
            _ => unreachable!("merged siblings sit at equal depth"),
        }
        stats.merges += 1;
    }
}

#[cfg(test)]
impl<K: Ord + Clone + std::fmt::Debug> Node<K> {
    /// Deep structural check; returns the subtree height so callers can
    /// assert all leaves sit at equal depth. Panics on any violation.
    pub(crate) fn check_invariants(&self, t: usize, is_root: bool) -> usize {
        use crate::common::config::min_keys;

        let keys = self.keys();
        assert!(keys.len() <= max_keys(t), "node exceeds {} keys", max_keys(t));
        if !is_root {
            assert!(
                keys.len() >= min_keys(t),
                "non-root node below {} keys: {:?}",
                min_keys(t),
                keys
            );
        }
        assert!(
            keys.windows(2).all(|w| w[0] < w[1]),
            "keys not strictly ascending: {:?}",
            keys
        );

        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { keys, children } => {
                assert_eq!(children.len(), keys.len() + 1, "child count mismatch");
                let depth = children[0].check_invariants(t, false);
                for child in &children[1..] {
                    assert_eq!(
                        child.check_invariants(t, false),
                        depth,
                        "leaves at unequal depth"
                    );
                }
                for (i, key) in keys.iter().enumerate() {
                    assert!(children[i].max_key() < key, "left subtree reaches separator");
                    assert!(
                        children[i + 1].min_key() > key,
                        "right subtree reaches separator"
                    );
                }
                depth + 1
            }
        }
    }
}
