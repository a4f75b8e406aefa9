//! Wayfind Harness: domain worlds, run configuration and the runner.
//!
//! The harness does NOT implement search logic. It delegates to
//! `wayfind_search`. Worlds provide problems and heuristics; the runner
//! resolves names, runs the engine and packages a [`runner::RunReport`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod runner;
pub mod worlds;

pub use config::{ConfigError, RunConfig};
pub use runner::{run_disk_stack, run_food, run_maze_position, run_npuzzle, RunError, RunReport};
