//! `wayfind`: run one search over a built-in world and print the result.
//!
//! ```text
//! wayfind -f astar -H manhattan maze layouts/medium.lay
//! wayfind -f ucs npuzzle 1 4 2 3 7 5 6 8 0
//! wayfind --json hanoi --disks 4
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG=wayfind_search=trace` to see every
//! expansion.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wayfind_harness::worlds::disk_stack::DiskStack;
use wayfind_harness::worlds::grid_maze::{Coord, FoodProblem, Maze, PositionProblem};
use wayfind_harness::worlds::sliding_tile::NPuzzle;
use wayfind_harness::{
    run_disk_stack, run_food, run_maze_position, run_npuzzle, ConfigError, RunConfig, RunError,
    RunReport,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy: dfs, bfs, ucs, greedy or astar
    #[clap(short = 'f', long, global = true)]
    strategy: Option<String>,

    /// Heuristic name (world specific; `null` is always available)
    #[clap(short = 'H', long, global = true)]
    heuristic: Option<String>,

    /// Allow states to be expanded more than once
    #[clap(long, global = true)]
    tree_search: bool,

    /// Stop after this many expansions
    #[clap(long, global = true)]
    max_expansions: Option<u64>,

    /// TOML file with default settings; flags override it
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Print the canonical JSON report instead of text
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    world: World,
}

#[derive(Subcommand, Debug)]
enum World {
    /// Walk from the maze's start cell to a goal cell
    Maze {
        /// Layout file (`%` wall, `.` food, `P` start, `G` ghost)
        layout: PathBuf,
        /// Goal cell as `x,y` (default `1,1`)
        #[clap(long, value_parser = parse_coord)]
        goal: Option<Coord>,
    },
    /// Eat every food cell in the maze
    Food {
        /// Layout file
        layout: PathBuf,
    },
    /// Solve a sliding-tile board given row-major, 0 for the blank
    Npuzzle {
        #[clap(required = true, num_args = 4..)]
        tiles: Vec<u8>,
    },
    /// Move a tower of disks from the first peg to the last
    Hanoi {
        #[clap(long, default_value_t = 3)]
        disks: u8,
    },
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Coord::new(x, y))
}

fn resolve_config(args: &Args) -> Result<RunConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(strategy) = &args.strategy {
        config.strategy.clone_from(strategy);
    }
    if let Some(heuristic) = &args.heuristic {
        config.heuristic.clone_from(heuristic);
    }
    if args.tree_search {
        config.graph_search = false;
    }
    if args.max_expansions.is_some() {
        config.max_expansions = args.max_expansions;
    }
    config.validate()?;
    Ok(config)
}

fn read_maze(path: &Path) -> Result<Maze, RunError> {
    let text = std::fs::read_to_string(path).map_err(ConfigError::from)?;
    Ok(Maze::parse(&text)?)
}

fn run(args: &Args) -> Result<RunReport, RunError> {
    let config = resolve_config(args)?;
    match &args.world {
        World::Maze { layout, goal } => {
            let maze = read_maze(layout)?;
            let mut problem = PositionProblem::from_maze(maze)?;
            if let Some(goal) = goal {
                problem = PositionProblem::new(problem.maze().clone(), problem.start(), *goal);
            }
            run_maze_position(&problem, &config)
        }
        World::Food { layout } => {
            let problem = FoodProblem::new(read_maze(layout)?)?;
            run_food(&problem, &config)
        }
        World::Npuzzle { tiles } => run_npuzzle(&NPuzzle::new(tiles)?, &config),
        World::Hanoi { disks } => run_disk_stack(&DiskStack::tower(*disks), &config),
    }
}

fn print_text(report: &RunReport) {
    println!(
        "{} with {} (heuristic {}, {} search)",
        report.problem_id,
        report.strategy,
        report.heuristic,
        if report.graph_search { "graph" } else { "tree" },
    );
    match report.cost {
        Some(cost) => {
            println!("Path found with total cost {cost} in {} steps", report.actions.len());
            for (i, action) in report.actions.iter().enumerate() {
                println!("  {:>4}: {action}", i + 1);
            }
            if let Some(picture) = &report.picture {
                println!("\n{picture}");
            } else if let Some(last) = report.states.last() {
                println!("\nFinal state:\n{last}");
            }
        }
        None => println!("No solution ({})", report.termination),
    }
    println!("Search nodes expanded: {}", report.expanded);
    println!("trace_digest={}", report.trace_digest);
    println!("report_digest={}", report.report_digest);
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(report) => {
            if args.json {
                println!("{}", String::from_utf8_lossy(&report.report_json));
            } else {
                print_text(&report);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
