//! Heuristic contract: a non-negative estimate of remaining cost.

use crate::problem::{Cost, SearchProblem};

/// Estimated cost-to-goal for states of problem `P`.
///
/// Compatibility is expressed through the type parameter: a heuristic
/// names the problem shape it assumes. Implementations that accept a
/// broader shape than they understand must return 0 outside it rather than
/// fail, so a mismatched pairing degrades to the null heuristic.
///
/// For A* to return optimal plans the heuristic must never overestimate
/// the true remaining cost (admissibility). Under graph search it must
/// also be consistent: `h(s) <= cost(s, a) + h(successor(s, a))`.
pub trait Heuristic<P: SearchProblem + ?Sized> {
    /// Registry name of this heuristic (e.g. `"manhattan"`).
    fn name(&self) -> &str;

    /// Estimated remaining cost from `state`. Must be 0 at goal states.
    fn value(&self, state: &P::State, problem: &P) -> Cost;
}

/// The trivial heuristic: 0 everywhere.
///
/// Pairs with every problem. Greedy search under it falls back to
/// insertion order and A* becomes uniform-cost search; both are supported
/// modes, not errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P: SearchProblem + ?Sized> Heuristic<P> for NullHeuristic {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "null"
    }

    fn value(&self, _state: &P::State, _problem: &P) -> Cost {
        0
    }
}

impl<P, H> Heuristic<P> for &H
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn value(&self, state: &P::State, problem: &P) -> Cost {
        (**self).value(state, problem)
    }
}

impl<P, H> Heuristic<P> for Box<H>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn value(&self, state: &P::State, problem: &P) -> Cost {
        (**self).value(state, problem)
    }
}
