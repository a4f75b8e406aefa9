//! Optimality properties on random weighted DAGs and walled grids.
//!
//! For every generated graph, UCS and A* (null heuristic) must return the
//! same cost as exhaustive path enumeration, and BFS must return a path with
//! the fewest edges. Unreachable goals must be reported as an exhausted
//! frontier by every strategy. On random mazes, A* under the Manhattan
//! heuristic must match the UCS cost.

use std::collections::HashSet;

use lock_tests::fixtures::WeightedDag;
use proptest::prelude::*;
use wayfind_harness::worlds::grid_maze::{Coord, ManhattanHeuristic, Maze, PositionProblem};
use wayfind_kernel::NullHeuristic;
use wayfind_search::{search_with_policy, NoSolutionReason, SearchPolicy, Strategy as SearchStrategy};

fn dag_strategy() -> impl Strategy<Value = WeightedDag> {
    (2u8..7, prop::collection::vec((0u8..7, 0u8..7, 1u64..10), 0..18))
        .prop_map(|(vertices, triples)| WeightedDag::from_triples(vertices, &triples))
}

/// Start in the bottom-left cell, goal in the top-right; both kept open.
fn maze_strategy() -> impl Strategy<Value = PositionProblem> {
    (2usize..9, 2usize..8)
        .prop_flat_map(|(width, height)| {
            (
                Just(width),
                Just(height),
                prop::collection::vec(prop::bool::weighted(0.3), width * height),
            )
        })
        .prop_map(|(width, height, walls)| {
            let mut text = String::new();
            for (row, cells) in walls.chunks(width).enumerate() {
                for (col, &wall) in cells.iter().enumerate() {
                    let start = row == height - 1 && col == 0;
                    let goal = row == 0 && col == width - 1;
                    text.push(if wall && !start && !goal { '%' } else { ' ' });
                }
                text.push('\n');
            }
            let maze = Maze::parse(&text).unwrap();
            let goal = Coord::new(maze.width() - 1, maze.height() - 1);
            PositionProblem::new(maze, Coord::new(0, 0), goal)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn cost_optimal_strategies_match_enumeration(dag in dag_strategy()) {
        let optimum = dag.exhaustive_optimum();
        for strategy in [SearchStrategy::UniformCost, SearchStrategy::AStar] {
            for policy in [SearchPolicy::graph(), SearchPolicy::tree()] {
                let outcome = search_with_policy(strategy, &dag, &NullHeuristic, &policy).unwrap();
                match optimum {
                    Some((cost, _)) => {
                        let solution = outcome.solution().unwrap();
                        prop_assert_eq!(solution.cost, cost);
                        let states = solution.replay(&dag).unwrap();
                        prop_assert_eq!(states.last().copied(), Some(dag.vertices - 1));
                    }
                    None => prop_assert_eq!(
                        outcome.no_solution_reason(),
                        Some(NoSolutionReason::FrontierExhausted)
                    ),
                }
            }
        }
    }

    #[test]
    fn bfs_finds_fewest_edges(dag in dag_strategy()) {
        let optimum = dag.exhaustive_optimum();
        let outcome =
            search_with_policy(SearchStrategy::BreadthFirst, &dag, &NullHeuristic, &SearchPolicy::graph())
                .unwrap();
        match optimum {
            Some((_, len)) => prop_assert_eq!(outcome.solution().unwrap().len(), len),
            None => prop_assert!(!outcome.is_found()),
        }
    }

    #[test]
    fn every_strategy_finds_some_path_when_one_exists(dag in dag_strategy()) {
        let reachable = dag.exhaustive_optimum().is_some();
        for strategy in SearchStrategy::ALL {
            let outcome =
                search_with_policy(strategy, &dag, &NullHeuristic, &SearchPolicy::graph()).unwrap();
            prop_assert_eq!(outcome.is_found(), reachable);
            if let Some(solution) = outcome.solution() {
                let states = solution.replay(&dag).unwrap();
                prop_assert_eq!(states.len(), solution.len() + 1);
            }
        }
    }

    #[test]
    fn astar_manhattan_matches_ucs_on_mazes(problem in maze_strategy()) {
        let policy = SearchPolicy::graph();
        let ucs = search_with_policy(SearchStrategy::UniformCost, &problem, &NullHeuristic, &policy)
            .unwrap();
        let astar =
            search_with_policy(SearchStrategy::AStar, &problem, &ManhattanHeuristic, &policy).unwrap();

        prop_assert_eq!(astar.is_found(), ucs.is_found());
        if let (Some(a), Some(u)) = (astar.solution(), ucs.solution()) {
            prop_assert_eq!(a.cost, u.cost);
            let states = a.replay(&problem).unwrap();
            prop_assert_eq!(states.last().copied(), Some(problem.goal()));
        }

        let mut seen = HashSet::new();
        for state in astar.expanded() {
            prop_assert!(seen.insert(*state), "A* expanded {} twice", state);
        }
    }
}
