//! Harness runner: resolve names, search, replay, and package a report.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig → Strategy::from_name + HeuristicRegistry::resolve
//!   → search_with_policy() → Solution::replay()
//!   → canonical report JSON → trace/report digests → RunReport
//! ```
//!
//! The runner holds no search logic of its own; the engine and the worlds
//! do the work.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;
use tracing::info;
use wayfind_kernel::proof::canon::canonical_json_bytes;
use wayfind_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use wayfind_kernel::{Cost, IllegalTransition, SearchProblem};
use wayfind_search::{
    search_with_policy, HeuristicRegistry, RegistryError, ReportError, SearchError,
    SearchOutcome, SearchStats, Strategy,
};

use crate::config::{ConfigError, RunConfig};
use crate::worlds::disk_stack::{disk_stack_heuristics, DiskLayoutError, DiskStack};
use crate::worlds::grid_maze::{
    food_heuristics, position_heuristics, FoodProblem, MazeError, PositionProblem,
};
use crate::worlds::sliding_tile::{npuzzle_heuristics, NPuzzle, TileLayoutError};

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Tiles(#[from] TileLayoutError),
    #[error(transparent)]
    Disks(#[from] DiskLayoutError),
    /// The engine returned a plan that does not replay on its own problem.
    #[error("solution does not replay: {0}")]
    Replay(#[from] IllegalTransition),
    #[error("failed to build run report: {0}")]
    Report(#[from] ReportError),
}

/// Everything a caller needs from one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub problem_id: String,
    pub strategy: Strategy,
    /// Name of the heuristic that ran. `null` when the requested one
    /// belongs to another world.
    pub heuristic: String,
    pub graph_search: bool,
    /// `goal_reached`, `frontier_exhausted` or `expansion_budget_exceeded`.
    pub termination: String,
    /// Action names, start to goal. Empty without a solution.
    pub actions: Vec<String>,
    /// Replayed states, start to goal, rendered as text.
    pub states: Vec<String>,
    pub cost: Option<Cost>,
    /// Number of states in the expansion trace.
    pub expanded: usize,
    pub stats: SearchStats,
    pub trace_digest: ContentHash,
    pub report_digest: ContentHash,
    /// Canonical JSON report (sorted keys, compact).
    pub report_json: Vec<u8>,
    /// The world drawn with the plan overlaid, for worlds that can draw one.
    pub picture: Option<String>,
}

impl RunReport {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cost.is_some()
    }
}

/// Resolve, search, replay and report for any problem.
///
/// Returns the report together with the raw outcome so a world-specific
/// wrapper can add a picture.
fn run_problem<P, F>(
    problem: &P,
    registry: &HeuristicRegistry<P>,
    config: &RunConfig,
    render: F,
) -> Result<(RunReport, SearchOutcome<P::State, P::Action>), RunError>
where
    P: SearchProblem,
    P::State: Serialize,
    P::Action: Serialize + Display,
    F: Fn(&P::State) -> String,
{
    let strategy = Strategy::from_name(&config.strategy)?;
    let heuristic = registry.resolve(&config.heuristic)?;
    let heuristic_name = heuristic.name().to_string();
    let policy = config.policy();

    let outcome = search_with_policy(strategy, problem, heuristic.as_ref(), &policy)?;

    let (actions, states, cost) = match outcome.solution() {
        Some(solution) => {
            let replayed = solution.replay(problem)?;
            (
                solution.actions.iter().map(ToString::to_string).collect(),
                replayed.iter().map(&render).collect(),
                Some(solution.cost),
            )
        }
        None => (Vec::new(), Vec::new(), None),
    };

    let mut report = outcome.to_json_value()?;
    if let Value::Object(map) = &mut report {
        map.insert("heuristic".into(), Value::String(heuristic_name.clone()));
    }
    let report_json = canonical_json_bytes(&report).map_err(ReportError::from)?;
    let report_digest = canonical_hash(HashDomain::SearchReport, &report_json);
    let trace_digest = outcome.trace_digest()?;

    let termination = match outcome.no_solution_reason() {
        None => "goal_reached",
        Some(reason) => reason.as_str(),
    };

    info!(
        problem = problem.problem_id(),
        strategy = strategy.name(),
        heuristic = heuristic_name.as_str(),
        termination,
        cost = ?cost,
        expanded = outcome.expanded().len(),
        "run complete"
    );

    let run_report = RunReport {
        problem_id: problem.problem_id().to_string(),
        strategy,
        heuristic: heuristic_name,
        graph_search: policy.graph_search,
        termination: termination.to_string(),
        actions,
        states,
        cost,
        expanded: outcome.expanded().len(),
        stats: *outcome.stats(),
        trace_digest,
        report_digest,
        report_json,
        picture: None,
    };
    Ok((run_report, outcome))
}

/// Reach the problem's goal cell. The report carries a drawing of the plan.
///
/// # Errors
///
/// Returns [`RunError`] for an unknown strategy or heuristic, an invalid
/// policy, or an inconsistent problem.
pub fn run_maze_position(problem: &PositionProblem, config: &RunConfig) -> Result<RunReport, RunError> {
    let registry = position_heuristics();
    let (mut report, outcome) = run_problem(problem, &registry, config, ToString::to_string)?;
    if let Some(solution) = outcome.solution() {
        report.picture = Some(problem.maze().render_plan(problem.start(), &solution.actions)?);
    }
    Ok(report)
}

/// Eat every food cell.
///
/// # Errors
///
/// See [`run_maze_position`].
pub fn run_food(problem: &FoodProblem, config: &RunConfig) -> Result<RunReport, RunError> {
    let registry = food_heuristics();
    let (mut report, outcome) = run_problem(problem, &registry, config, ToString::to_string)?;
    if let Some(solution) = outcome.solution() {
        let start = problem.start_state().position;
        report.picture = Some(problem.maze().render_plan(start, &solution.actions)?);
    }
    Ok(report)
}

/// Solve a sliding-tile board.
///
/// # Errors
///
/// See [`run_maze_position`].
pub fn run_npuzzle(problem: &NPuzzle, config: &RunConfig) -> Result<RunReport, RunError> {
    let registry = npuzzle_heuristics();
    let (report, _) = run_problem(problem, &registry, config, |tiles| problem.render(tiles))?;
    Ok(report)
}

/// Move every disk to the last peg.
///
/// # Errors
///
/// See [`run_maze_position`].
pub fn run_disk_stack(problem: &DiskStack, config: &RunConfig) -> Result<RunReport, RunError> {
    let registry = disk_stack_heuristics();
    let (report, _) = run_problem(problem, &registry, config, ToString::to_string)?;
    Ok(report)
}
