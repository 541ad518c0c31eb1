//! Leaf-chained node representation and slot identifiers.

use std::fmt;

/// Index of a node slot inside a tree's arena.
///
/// Slot indices are stable for a node's lifetime. Slots of merged-away nodes
/// are recycled through the tree's free list, so a `NodeId` must never be
/// held across the mutation that destroys its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// A single leaf-chained tree node.
///
/// Internal nodes carry routing keys only; every live key is leaf data. A
/// leaf's `next` link is an ownership-free slot index to its right-hand
/// neighbour, threading all leaves into one ascending chain. The rightmost
/// leaf carries `None`.
#[derive(Debug)]
pub(crate) enum Node<K> {
    Leaf {
        keys: Vec<K>,
        next: Option<NodeId>,
    },
    Internal {
        keys: Vec<K>,
        children: Vec<NodeId>,
    },
}

impl<K: Ord> Node<K> {
    /// Create an empty, unchained leaf.
    pub(crate) fn new_leaf() -> Self {
        Node::Leaf {
            keys: Vec::new(),
            next: None,
        }
    }

    /// The node's keys, regardless of variant.
    pub(crate) fn keys(&self) -> &[K] {
        match self {
            Node::Leaf { keys, .. } | Node::Internal { keys, .. } => keys,
        }
    }

    pub(crate) fn key_count(&self) -> usize {
        self.keys().len()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Descent child index for a target key: the number of separators at or
    /// below it. A key equal to a separator belongs to the *right* of it,
    /// because separators mirror the minimum of the subtree they precede.
    pub(crate) fn route(&self, key: &K) -> usize {
        self.keys().partition_point(|sep| sep <= key)
    }
}
