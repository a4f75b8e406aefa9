//! End-to-end search scenarios over the reference worlds.
//!
//! - open grid: every optimal strategy finds the 4-step path, A* expands
//!   no more than UCS
//! - 8-puzzle: UCS with the null heuristic replays to the goal layout
//! - unknown strategy: rejected before the heuristic is consulted
//! - enclosed goal: every strategy reports an exhausted frontier
//! - graph search on cyclic worlds: no state expanded twice
//! - tree search on an acyclic world: same optimum as graph search

use std::collections::HashSet;

use lock_tests::fixtures::{enclosed_goal, open_grid, CountingHeuristic, WeightedDag, EIGHT_PUZZLE};
use wayfind_harness::worlds::grid_maze::{Coord, ManhattanHeuristic};
use wayfind_harness::worlds::sliding_tile::{NPuzzle, TileManhattan};
use wayfind_kernel::{NullHeuristic, SearchProblem};
use wayfind_search::{
    search, search_with_policy, NoSolutionReason, SearchError, SearchPolicy, Strategy,
};

#[test]
fn open_grid_optimal_strategies_agree() {
    let problem = open_grid(3, 3);

    for (strategy, heuristic) in [("bfs", false), ("ucs", false), ("astar", true)] {
        let outcome = if heuristic {
            search(strategy, &problem, &ManhattanHeuristic, true)
        } else {
            search(strategy, &problem, &NullHeuristic, true)
        }
        .unwrap();
        let solution = outcome.solution().unwrap_or_else(|| panic!("{strategy} found no path"));
        assert_eq!(solution.len(), 4, "{strategy} plan length");
        assert_eq!(solution.cost, 4, "{strategy} plan cost");
        let states = solution.replay(&problem).unwrap();
        assert_eq!(states.last(), Some(&Coord::new(2, 2)), "{strategy} replay");
    }
}

#[test]
fn astar_expands_no_more_than_ucs() {
    let problem = open_grid(3, 3);
    let ucs = search("ucs", &problem, &NullHeuristic, true).unwrap();
    let astar = search("astar", &problem, &ManhattanHeuristic, true).unwrap();
    assert!(
        astar.expanded().len() <= ucs.expanded().len(),
        "astar expanded {} > ucs expanded {}",
        astar.expanded().len(),
        ucs.expanded().len()
    );
}

#[test]
fn eight_puzzle_ucs_replays_to_goal() {
    let puzzle = NPuzzle::new(&EIGHT_PUZZLE).unwrap();
    let outcome = search("ucs", &puzzle, &NullHeuristic, true).unwrap();
    let solution = outcome.solution().unwrap();
    let states = solution.replay(&puzzle).unwrap();
    assert_eq!(states.len(), solution.len() + 1);
    assert_eq!(
        states.last().unwrap().as_slice(),
        &[0, 1, 2, 3, 4, 5, 6, 7, 8]
    );
    assert_eq!(solution.cost, 4);
}

#[test]
fn unknown_strategy_never_touches_heuristic() {
    let problem = open_grid(3, 3);
    let heuristic = CountingHeuristic::default();
    let err = search("dijkstra", &problem, &heuristic, true).unwrap_err();
    assert_eq!(
        err,
        SearchError::UnknownStrategy {
            name: "dijkstra".into()
        }
    );
    assert_eq!(heuristic.calls(), 0);
}

#[test]
fn informed_strategies_consult_heuristic() {
    let problem = open_grid(3, 3);
    for name in ["greedy", "astar"] {
        let heuristic = CountingHeuristic::default();
        search(name, &problem, &heuristic, true).unwrap();
        assert!(heuristic.calls() > 0, "{name} never called the heuristic");
    }
}

#[test]
fn enclosed_goal_exhausts_frontier() {
    let problem = enclosed_goal();
    for strategy in Strategy::ALL {
        let outcome =
            search_with_policy(strategy, &problem, &NullHeuristic, &SearchPolicy::graph()).unwrap();
        assert_eq!(
            outcome.no_solution_reason(),
            Some(NoSolutionReason::FrontierExhausted),
            "{strategy}"
        );
        // The 3x3 room around the start is the whole reachable space.
        assert_eq!(outcome.expanded().len(), 9, "{strategy}");
    }
}

#[test]
fn graph_search_never_expands_twice() {
    let grid = open_grid(5, 5);
    let puzzle = NPuzzle::new(&EIGHT_PUZZLE).unwrap();

    for strategy in Strategy::ALL {
        let policy = SearchPolicy::graph();

        let outcome = search_with_policy(strategy, &grid, &ManhattanHeuristic, &policy).unwrap();
        let unique: HashSet<_> = outcome.expanded().iter().collect();
        assert_eq!(unique.len(), outcome.expanded().len(), "grid {strategy}");

        if strategy == Strategy::DepthFirst {
            continue;
        }
        let outcome = search_with_policy(strategy, &puzzle, &TileManhattan, &policy).unwrap();
        let unique: HashSet<_> = outcome.expanded().iter().collect();
        assert_eq!(unique.len(), outcome.expanded().len(), "puzzle {strategy}");
        assert!(outcome.is_found(), "puzzle {strategy}");
    }
}

#[test]
fn expansion_trace_ends_at_goal() {
    let problem = open_grid(4, 4);
    for strategy in Strategy::ALL {
        let outcome =
            search_with_policy(strategy, &problem, &ManhattanHeuristic, &SearchPolicy::graph())
                .unwrap();
        let last = outcome.expanded().last().copied();
        assert_eq!(last, Some(Coord::new(3, 3)), "{strategy}");
        assert!(problem.is_goal(&last.unwrap()));
    }
}

#[test]
fn tree_search_on_dag_matches_graph_search() {
    let dag = WeightedDag::from_triples(
        5,
        &[(0, 1, 1), (0, 2, 4), (1, 2, 1), (1, 3, 5), (2, 3, 1), (3, 4, 2), (2, 4, 6)],
    );
    for strategy in [Strategy::UniformCost, Strategy::AStar] {
        let graph =
            search_with_policy(strategy, &dag, &NullHeuristic, &SearchPolicy::graph()).unwrap();
        let tree =
            search_with_policy(strategy, &dag, &NullHeuristic, &SearchPolicy::tree()).unwrap();
        let graph = graph.into_solution().unwrap();
        let tree = tree.into_solution().unwrap();
        assert_eq!(graph.cost, 5, "{strategy}");
        assert_eq!(tree.cost, graph.cost, "{strategy}");
        assert_eq!(tree.actions, graph.actions, "{strategy}");
        assert!(!tree.run.graph_search);
    }
}
