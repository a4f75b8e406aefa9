//! Search policy: duplicate handling and budgets.

use crate::error::SearchError;

/// Per-invocation search configuration.
///
/// The default (`graph_search = true`, no budget) is the mode every
/// reference world runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Expand each state at most once (graph search). When `false`, paths
    /// may revisit states (tree search) and termination is only guaranteed
    /// on finite acyclic state spaces.
    pub graph_search: bool,
    /// Hard cap on node expansions. `None` runs until a goal is found or
    /// the frontier is exhausted.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Graph search, no budget.
    #[must_use]
    pub const fn graph() -> Self {
        Self {
            graph_search: true,
            max_expansions: None,
        }
    }

    /// Tree search, no budget.
    #[must_use]
    pub const fn tree() -> Self {
        Self {
            graph_search: false,
            max_expansions: None,
        }
    }

    /// Same policy with an expansion budget.
    #[must_use]
    pub const fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Reject policies the engine cannot run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget,
    /// which could never expand the start state.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::graph()
    }
}
