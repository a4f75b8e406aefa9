//! The state-space contract consumed by the search engine.
//!
//! The engine treats a problem as a black box: it never inspects state
//! internals and only calls the five operations on [`SearchProblem`].

use std::fmt::Debug;
use std::hash::Hash;

/// Step and path cost. Integer-valued so frontier ordering is total and
/// identical on every platform.
pub type Cost = u64;

/// A successor was requested for an action that is not legal from the
/// given state.
///
/// This signals an inconsistent state space. The engine never recovers
/// from it: it propagates as a fatal error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("illegal transition in {problem}: action {action} is not legal from state {state}")]
pub struct IllegalTransition {
    /// Identifier of the problem that rejected the transition.
    pub problem: String,
    /// Debug rendering of the offending state.
    pub state: String,
    /// Debug rendering of the offending action.
    pub action: String,
}

impl IllegalTransition {
    /// Build the fault from the rejected `(state, action)` pair.
    #[must_use]
    pub fn new<S: Debug, A: Debug>(problem: &str, state: &S, action: &A) -> Self {
        Self {
            problem: problem.to_string(),
            state: format!("{state:?}"),
            action: format!("{action:?}"),
        }
    }
}

/// A searchable state space.
///
/// # Contract
///
/// - `actions(s)` returns exactly the actions for which `successor(s, a)`
///   succeeds, in a deterministic order. The engine expands children in
///   this order, so it is part of the reproducibility contract.
/// - `successor` returns a new state; it never mutates its input.
/// - `cost` is finite and non-negative for every legal transition. It may
///   be called with an illegal action to price a penalty, but such a
///   transition must never be produced by `successor`.
/// - Semantically identical states must compare equal and hash
///   identically; graph search deduplicates on `Eq + Hash`.
pub trait SearchProblem {
    /// One configuration of the domain.
    type State: Clone + Eq + Hash + Debug;
    /// One legal transition between states.
    type Action: Clone + Eq + Debug;

    /// Identifier used in logs and reports (e.g. `"grid_maze.position"`).
    fn problem_id(&self) -> &str;

    /// The designated start state.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Legal actions from `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalTransition`] if `action` is not in `actions(state)`.
    fn successor(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, IllegalTransition>;

    /// Cost of taking `action` from `state`.
    fn cost(&self, state: &Self::State, action: &Self::Action) -> Cost;
}
