//! Search entry point and expansion loop.

use tracing::{debug, debug_span, trace};
use wayfind_kernel::{Heuristic, SearchProblem};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::policy::SearchPolicy;
use crate::solution::{Failure, NoSolutionReason, RunInfo, SearchOutcome, SearchStats, Solution};
use crate::strategy::Strategy;

/// Run a search with the strategy named `strategy_name`.
///
/// This is the entry point external callers use: `strategy_name` is one of
/// `dfs`, `bfs`, `ucs`, `greedy`, `astar`, and `graph_search` selects
/// duplicate suppression. See [`search_with_policy`] for the algorithm.
///
/// # Errors
///
/// - [`SearchError::UnknownStrategy`] for an unrecognized name, before any
///   frontier is built or the heuristic is consulted.
/// - [`SearchError::IllegalTransition`] if the problem rejects one of its
///   own actions.
pub fn search<P, H>(
    strategy_name: &str,
    problem: &P,
    heuristic: &H,
    graph_search: bool,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    let strategy = Strategy::from_name(strategy_name)?;
    let policy = SearchPolicy {
        graph_search,
        ..SearchPolicy::default()
    };
    search_with_policy(strategy, problem, heuristic, &policy)
}

/// Run a search under an explicit strategy and policy.
///
/// The loop pops the lowest-keyed node, records its state in the trace,
/// stops if it is a goal, and otherwise queues one child per legal action.
/// Under graph search a state is expanded at most once: children whose
/// state was already expanded are dropped, and queued nodes whose state
/// was expanded after they were pushed are discarded when popped.
///
/// Exhausting the frontier or the expansion budget returns
/// `Ok(SearchOutcome::NoSolution)`.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if `policy` fails validation.
/// - [`SearchError::IllegalTransition`] if `successor` rejects an action
///   returned by `actions` for the same state.
pub fn search_with_policy<P, H>(
    strategy: Strategy,
    problem: &P,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    policy.validate()?;

    let span = debug_span!(
        "search",
        strategy = strategy.name(),
        problem = problem.problem_id(),
        graph_search = policy.graph_search,
    );
    let _guard = span.enter();

    let estimate = |state: &P::State| {
        if strategy.uses_heuristic() {
            heuristic.value(state, problem)
        } else {
            0
        }
    };

    let mut frontier = Frontier::new(policy.graph_search);
    let run = RunInfo {
        strategy,
        problem_id: problem.problem_id().to_string(),
        graph_search: frontier.is_graph_search(),
    };
    let mut nodes: Vec<SearchNode<P::State, P::Action>> = Vec::new();
    let mut expanded: Vec<P::State> = Vec::new();
    let mut stats = SearchStats::default();

    let start = problem.start_state();
    let root = SearchNode::root(start.clone(), estimate(&start));
    frontier.push(strategy.frontier_key(&root), root.node_id);
    nodes.push(root);
    stats.nodes_generated = 1;

    loop {
        stats.frontier_high_water = frontier.high_water() as u64;

        if frontier.is_empty() {
            debug!(
                expansions = stats.expansions,
                generated = stats.nodes_generated,
                "frontier exhausted"
            );
            return Ok(SearchOutcome::NoSolution(Failure {
                reason: NoSolutionReason::FrontierExhausted,
                expanded,
                stats,
                run,
            }));
        }

        if policy
            .max_expansions
            .is_some_and(|limit| stats.expansions >= limit)
        {
            debug!(expansions = stats.expansions, "expansion budget exceeded");
            return Ok(SearchOutcome::NoSolution(Failure {
                reason: NoSolutionReason::ExpansionBudgetExceeded,
                expanded,
                stats,
                run,
            }));
        }

        let Some(index) = frontier.pop() else {
            continue;
        };
        let current = &nodes[index];

        if !frontier.mark_expanded(&current.state) {
            stats.stale_pops += 1;
            continue;
        }
        expanded.push(current.state.clone());
        stats.expansions += 1;
        trace!(
            node_id = current.node_id,
            depth = current.depth,
            g_cost = current.g_cost,
            h_cost = current.h_cost,
            frontier = frontier.len(),
            "expand"
        );

        if problem.is_goal(&current.state) {
            let (actions, cost) = reconstruct_plan(&nodes, index);
            debug!(
                cost,
                length = actions.len(),
                expansions = stats.expansions,
                generated = stats.nodes_generated,
                "goal reached"
            );
            return Ok(SearchOutcome::Found(Solution {
                actions,
                cost,
                expanded,
                stats,
                run,
            }));
        }

        let parent_state = current.state.clone();
        let parent_g = current.g_cost;
        let child_depth = current.depth.saturating_add(1);

        for action in problem.actions(&parent_state) {
            let child_state = problem.successor(&parent_state, &action)?;
            if frontier.is_expanded(&child_state) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let g_cost = parent_g.saturating_add(problem.cost(&parent_state, &action));
            let h_cost = estimate(&child_state);
            let child = SearchNode {
                node_id: nodes.len(),
                parent_id: Some(index),
                state: child_state,
                producing_action: Some(action),
                depth: child_depth,
                g_cost,
                h_cost,
            };
            frontier.push(strategy.frontier_key(&child), child.node_id);
            nodes.push(child);
            stats.nodes_generated += 1;
        }
    }
}

/// Walk parent links from `goal_index` to the root.
///
/// Returns the actions in start-to-goal order and the goal's path cost.
#[must_use]
pub fn reconstruct_plan<S, A: Clone>(
    nodes: &[SearchNode<S, A>],
    goal_index: usize,
) -> (Vec<A>, wayfind_kernel::Cost) {
    let mut actions = Vec::new();
    let mut cursor = Some(goal_index);

    while let Some(index) = cursor {
        let node = &nodes[index];
        if let Some(action) = &node.producing_action {
            actions.push(action.clone());
        }
        cursor = node.parent_id;
    }

    actions.reverse();
    (actions, nodes[goal_index].g_cost)
}
