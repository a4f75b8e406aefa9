//! Priority frontier with an optional expanded set.
//!
//! The frontier stores arena indices, not nodes: the engine owns every node
//! for the lifetime of one invocation and the frontier only decides which
//! index comes out next.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::hash::Hash;

use crate::node::FrontierKey;

/// A frontier entry wrapping a node index with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest key first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_index: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the lowest key
/// - In graph-search mode, the set of states already expanded
/// - The high-water mark of the heap size
#[derive(Debug)]
pub struct Frontier<S> {
    heap: BinaryHeap<FrontierEntry>,
    expanded: Option<HashSet<S>>,
    high_water: usize,
}

impl<S: Eq + Hash + Clone> Frontier<S> {
    /// Create an empty frontier. `graph_search` enables the expanded set.
    #[must_use]
    pub fn new(graph_search: bool) -> Self {
        Self {
            heap: BinaryHeap::new(),
            expanded: graph_search.then(HashSet::new),
            high_water: 0,
        }
    }

    /// Insert a node index under `key`.
    pub fn push(&mut self, key: FrontierKey, node_index: usize) {
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node_index,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove the index with the lowest key.
    #[must_use]
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.node_index)
    }

    /// Record `state` as expanded.
    ///
    /// Returns `false` if graph search is on and the state was already
    /// expanded: the caller must discard the popped node. Always `true` in
    /// tree-search mode.
    pub fn mark_expanded(&mut self, state: &S) -> bool {
        match &mut self.expanded {
            Some(set) => {
                if set.contains(state) {
                    false
                } else {
                    set.insert(state.clone());
                    true
                }
            }
            None => true,
        }
    }

    /// Whether `state` was already expanded. Always `false` in tree-search mode.
    #[must_use]
    pub fn is_expanded(&self, state: &S) -> bool {
        self.expanded.as_ref().is_some_and(|set| set.contains(state))
    }

    /// Whether duplicate states are being suppressed.
    #[must_use]
    pub fn is_graph_search(&self) -> bool {
        self.expanded.is_some()
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
