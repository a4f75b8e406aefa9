//! The strategy registry: a closed set of frontier orderings resolved by name.
//!
//! Every strategy is the same algorithm with a different [`FrontierKey`].
//! Lower keys pop first; the second key component is always derived from
//! insertion order, so equal-priority nodes leave the frontier in a stable,
//! reproducible order.

use std::fmt;
use std::str::FromStr;

use wayfind_kernel::Cost;

use crate::error::SearchError;
use crate::node::{FrontierKey, SearchNode};

/// A frontier ordering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Last in, first out.
    DepthFirst,
    /// First in, first out.
    BreadthFirst,
    /// Increasing path cost `g(n)`.
    UniformCost,
    /// Increasing heuristic estimate `h(n)`.
    Greedy,
    /// Increasing `g(n) + h(n)`.
    AStar,
}

impl Strategy {
    /// All strategies in registry order.
    pub const ALL: [Strategy; 5] = [
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::UniformCost,
        Self::Greedy,
        Self::AStar,
    ];

    /// The registry name (`dfs`, `bfs`, `ucs`, `greedy`, `astar`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
        }
    }

    /// Resolve a registry name.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownStrategy`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, SearchError> {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| SearchError::UnknownStrategy {
                name: name.to_string(),
            })
    }

    /// Whether the ordering reads `h(n)`. The engine skips heuristic
    /// evaluation entirely for the others.
    #[must_use]
    pub const fn uses_heuristic(self) -> bool {
        matches!(self, Self::Greedy | Self::AStar)
    }

    /// The frontier key of `node` under this ordering.
    #[must_use]
    pub fn frontier_key<S, A>(self, node: &SearchNode<S, A>) -> FrontierKey {
        let order = node.node_id as u64;
        let (priority, order): (Cost, u64) = match self {
            Self::DepthFirst => (0, u64::MAX - order),
            Self::BreadthFirst => (0, order),
            Self::UniformCost => (node.g_cost, order),
            Self::Greedy => (node.h_cost, order),
            Self::AStar => (node.f_cost(), order),
        };
        FrontierKey { priority, order }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
