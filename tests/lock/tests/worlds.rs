//! World-level lock tests.
//!
//! - disk stack: the optimum for n disks is 2^n - 1 moves
//! - food: the plan eats every food cell
//! - plan cursor: step-by-step playback reproduces the replay
//! - budget: a capped search stops with `ExpansionBudgetExceeded`

use lock_tests::fixtures::{food_maze, open_grid, EIGHT_PUZZLE};
use wayfind_harness::worlds::disk_stack::{DiskStack, MisplacedDisks};
use wayfind_harness::worlds::grid_maze::{FoodHeuristic, ManhattanHeuristic};
use wayfind_harness::worlds::sliding_tile::NPuzzle;
use wayfind_kernel::{NullHeuristic, SearchProblem};
use wayfind_search::{search_with_policy, NoSolutionReason, SearchPolicy, Strategy};

#[test]
fn disk_stack_optimum_is_two_to_the_n_minus_one() {
    for disks in 1u8..=5 {
        let problem = DiskStack::tower(disks);
        let expected = (1u64 << disks) - 1;
        for (strategy, policy) in [
            (Strategy::BreadthFirst, SearchPolicy::graph()),
            (Strategy::UniformCost, SearchPolicy::graph()),
        ] {
            let outcome = search_with_policy(strategy, &problem, &NullHeuristic, &policy).unwrap();
            let solution = outcome.solution().unwrap();
            assert_eq!(solution.cost, expected, "{disks} disks, {strategy}");
        }
        let outcome =
            search_with_policy(Strategy::AStar, &problem, &MisplacedDisks, &SearchPolicy::graph())
                .unwrap();
        assert_eq!(outcome.solution().unwrap().cost, expected, "{disks} disks, astar");
    }
}

#[test]
fn food_plan_eats_everything() {
    let problem = food_maze();
    let start = problem.start_state();
    assert_eq!(start.food.len(), 3);

    for strategy in Strategy::ALL {
        let outcome =
            search_with_policy(strategy, &problem, &FoodHeuristic, &SearchPolicy::graph()).unwrap();
        let solution = outcome.solution().unwrap();
        let states = solution.replay(&problem).unwrap();
        let last = states.last().unwrap();
        assert!(last.food.is_empty(), "{strategy} left food behind");
        assert!(problem.is_goal(last));
    }
}

#[test]
fn food_astar_matches_ucs_cost() {
    let problem = food_maze();
    let ucs = search_with_policy(
        Strategy::UniformCost,
        &problem,
        &NullHeuristic,
        &SearchPolicy::graph(),
    )
    .unwrap();
    let astar =
        search_with_policy(Strategy::AStar, &problem, &FoodHeuristic, &SearchPolicy::graph())
            .unwrap();
    assert_eq!(
        astar.solution().unwrap().cost,
        ucs.solution().unwrap().cost
    );
    assert!(astar.expanded().len() <= ucs.expanded().len());
}

#[test]
fn plan_cursor_replays_solution() {
    let problem = NPuzzle::new(&EIGHT_PUZZLE).unwrap();
    let outcome =
        search_with_policy(Strategy::UniformCost, &problem, &NullHeuristic, &SearchPolicy::graph())
            .unwrap();
    let solution = outcome.solution().unwrap();
    let replayed = solution.replay(&problem).unwrap();

    let mut cursor = solution.plan_cursor();
    let mut state = problem.start_state();
    let mut visited = vec![state.clone()];
    while let Some(action) = cursor.next_action() {
        state = problem.successor(&state, &action).unwrap();
        visited.push(state.clone());
    }
    assert!(cursor.is_finished());
    assert_eq!(cursor.remaining(), 0);
    assert_eq!(visited, replayed);
    assert!(problem.is_goal(&state));
}

#[test]
fn budget_stops_search() {
    let problem = open_grid(8, 8);
    for strategy in Strategy::ALL {
        let policy = SearchPolicy::graph().with_max_expansions(5);
        let outcome = search_with_policy(strategy, &problem, &ManhattanHeuristic, &policy).unwrap();
        assert_eq!(
            outcome.no_solution_reason(),
            Some(NoSolutionReason::ExpansionBudgetExceeded),
            "{strategy}"
        );
        assert_eq!(outcome.expanded().len(), 5, "{strategy}");
        assert_eq!(outcome.stats().expansions, 5, "{strategy}");
    }
}

#[test]
fn budget_bounds_tree_search_on_cyclic_world() {
    let problem = open_grid(3, 3);
    let policy = SearchPolicy::tree().with_max_expansions(20);
    let outcome =
        search_with_policy(Strategy::DepthFirst, &problem, &NullHeuristic, &policy).unwrap();
    // DFS pops the last-offered move first, so it bounces between (0,0)
    // and (1,0) until the budget runs out.
    assert_eq!(
        outcome.no_solution_reason(),
        Some(NoSolutionReason::ExpansionBudgetExceeded)
    );
    assert_eq!(outcome.stats().expansions, 20);
}
