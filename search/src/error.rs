//! Typed search errors.
//!
//! `SearchError` covers configuration failures (raised before any frontier
//! exists) and fatal contract violations. Running out of frontier is NOT an
//! error: it is returned as [`crate::solution::SearchOutcome::NoSolution`].

use wayfind_kernel::IllegalTransition;

/// Fatal failure of a search invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The strategy name is not one of `dfs`, `bfs`, `ucs`, `greedy`, `astar`.
    #[error("unknown search strategy {name:?} (expected one of dfs, bfs, ucs, greedy, astar)")]
    UnknownStrategy { name: String },

    /// The policy carries a value the engine cannot honor.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// The problem's successor function rejected one of its own actions.
    #[error(transparent)]
    IllegalTransition(#[from] IllegalTransition),
}

/// Failure to resolve a named registry entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No heuristic with this name is registered for the problem.
    #[error("unknown heuristic {name:?} (available: {available})")]
    UnknownHeuristic { name: String, available: String },
}
