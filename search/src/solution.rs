//! Search results: solutions, failures and plan replay.
//!
//! Both outcomes carry the expansion trace as a field. It is an
//! observability artifact for visualization and fixtures; nothing in the
//! engine reads it back.

use wayfind_kernel::{Cost, IllegalTransition, SearchProblem};

use crate::strategy::Strategy;

/// Counters collected during one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded.
    pub expansions: u64,
    /// Nodes created, including the root.
    pub nodes_generated: u64,
    /// Children discarded because their state was already expanded.
    pub duplicates_suppressed: u64,
    /// Popped nodes discarded because their state was expanded after they
    /// were queued.
    pub stale_pops: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// What was run: echoed into every outcome and report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInfo {
    pub strategy: Strategy,
    pub problem_id: String,
    pub graph_search: bool,
}

/// A path from the start state to a goal state.
#[derive(Debug, Clone)]
pub struct Solution<S, A> {
    /// Actions from the start state to the goal, in order.
    pub actions: Vec<A>,
    /// True cumulative cost of `actions`.
    pub cost: Cost,
    /// States in expansion order (the goal state is last).
    pub expanded: Vec<S>,
    pub stats: SearchStats,
    pub run: RunInfo,
}

/// Why no solution was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSolutionReason {
    /// Every reachable node was expanded without meeting a goal.
    FrontierExhausted,
    /// `max_expansions` was reached first.
    ExpansionBudgetExceeded,
}

impl NoSolutionReason {
    /// Stable identifier used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

/// A search that ended without reaching a goal.
#[derive(Debug, Clone)]
pub struct Failure<S> {
    pub reason: NoSolutionReason,
    /// States in expansion order.
    pub expanded: Vec<S>,
    pub stats: SearchStats,
    pub run: RunInfo,
}

/// Result of a search that ran to completion.
///
/// `NoSolution` is a normal outcome the caller must check for, not an error.
#[derive(Debug, Clone)]
pub enum SearchOutcome<S, A> {
    Found(Solution<S, A>),
    NoSolution(Failure<S>),
}

impl<S, A> SearchOutcome<S, A> {
    /// Returns `true` if a goal was reached.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The solution, if any.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution<S, A>> {
        match self {
            Self::Found(solution) => Some(solution),
            Self::NoSolution(_) => None,
        }
    }

    /// Consume the outcome, keeping only the solution.
    #[must_use]
    pub fn into_solution(self) -> Option<Solution<S, A>> {
        match self {
            Self::Found(solution) => Some(solution),
            Self::NoSolution(_) => None,
        }
    }

    /// The failure reason, if no goal was reached.
    #[must_use]
    pub fn no_solution_reason(&self) -> Option<NoSolutionReason> {
        match self {
            Self::Found(_) => None,
            Self::NoSolution(failure) => Some(failure.reason),
        }
    }

    /// States in expansion order.
    #[must_use]
    pub fn expanded(&self) -> &[S] {
        match self {
            Self::Found(solution) => &solution.expanded,
            Self::NoSolution(failure) => &failure.expanded,
        }
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        match self {
            Self::Found(solution) => &solution.stats,
            Self::NoSolution(failure) => &failure.stats,
        }
    }

    #[must_use]
    pub fn run(&self) -> &RunInfo {
        match self {
            Self::Found(solution) => &solution.run,
            Self::NoSolution(failure) => &failure.run,
        }
    }
}

impl<S, A> Solution<S, A> {
    /// Number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the start state was already a goal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Replay the plan from `problem`'s start state.
    ///
    /// Returns every visited state, start first and goal last
    /// (`len() + 1` states).
    ///
    /// # Errors
    ///
    /// Returns [`IllegalTransition`] if the plan does not belong to
    /// `problem`.
    pub fn replay<P>(&self, problem: &P) -> Result<Vec<P::State>, IllegalTransition>
    where
        P: SearchProblem<Action = A> + ?Sized,
    {
        let mut current = problem.start_state();
        let mut states = Vec::with_capacity(self.actions.len() + 1);
        for action in &self.actions {
            let next = problem.successor(&current, action)?;
            states.push(std::mem::replace(&mut current, next));
        }
        states.push(current);
        Ok(states)
    }
}

impl<S, A: Clone> Solution<S, A> {
    /// A cursor that hands out the plan one action at a time.
    #[must_use]
    pub fn plan_cursor(&self) -> PlanCursor<A> {
        PlanCursor::new(self.actions.clone())
    }
}

/// Incremental playback of a cached plan.
///
/// Periodic callers (a game tick, an animation frame) run the engine once,
/// keep the cursor and take one action per tick.
#[derive(Debug, Clone)]
pub struct PlanCursor<A> {
    actions: Vec<A>,
    next: usize,
}

impl<A: Clone> PlanCursor<A> {
    #[must_use]
    pub fn new(actions: Vec<A>) -> Self {
        Self { actions, next: 0 }
    }

    /// The next action, or `None` once the plan is finished.
    pub fn next_action(&mut self) -> Option<A> {
        let action = self.actions.get(self.next)?.clone();
        self.next += 1;
        Some(action)
    }

    /// The next action without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<&A> {
        self.actions.get(self.next)
    }

    /// Actions not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.actions.len() - self.next
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next >= self.actions.len()
    }

    /// Restart playback from the first action.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}
