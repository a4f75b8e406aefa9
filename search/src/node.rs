//! Search node and frontier key types.

use wayfind_kernel::Cost;

/// One partial path held by the engine.
///
/// Nodes live in an arena owned by a single search invocation; `node_id`
/// is the arena index and is assigned in creation order. The path is
/// recovered by following `parent_id` links back to the root.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Arena index, monotonic in creation order.
    pub node_id: usize,
    /// Parent node (`None` for the root).
    pub parent_id: Option<usize>,
    /// The state this partial path ends in.
    pub state: S,
    /// The action that produced this node from its parent.
    pub producing_action: Option<A>,
    /// Path length in actions (root = 0).
    pub depth: u32,
    /// Cumulative path cost from the start state.
    pub g_cost: Cost,
    /// Heuristic estimate; 0 for strategies that never read it.
    pub h_cost: Cost,
}

impl<S, A> SearchNode<S, A> {
    /// The root node for `state`.
    #[must_use]
    pub fn root(state: S, h_cost: Cost) -> Self {
        Self {
            node_id: 0,
            parent_id: None,
            state,
            producing_action: None,
            depth: 0,
            g_cost: 0,
            h_cost,
        }
    }

    /// `f_cost = g_cost + h_cost`, saturating.
    #[must_use]
    pub fn f_cost(&self) -> Cost {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(priority, order)`.
///
/// Lower `priority` first, then lower `order`. `order` is unique per node,
/// so the ordering is total and extraction is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrontierKey {
    /// Strategy-specific primary key (0, `g`, `h` or `g + h`).
    pub priority: Cost,
    /// Insertion-derived tie-breaker.
    pub order: u64,
}
