//! Wayfind Kernel: the contracts every searchable domain implements.
//!
//! # API Surface
//!
//! - [`problem::SearchProblem`] -- a state space: start, goal test, legal
//!   actions, successor and step cost
//! - [`heuristic::Heuristic`] -- a non-negative cost-to-goal estimate
//! - [`proof::canon::canonical_json_bytes`] and [`proof::hash::canonical_hash`]
//!   -- the single place reproducible fixtures are serialized and digested
//!
//! # Module Dependency Direction
//!
//! `problem` ← `heuristic`; `proof` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod heuristic;
pub mod problem;
pub mod proof;

pub use heuristic::{Heuristic, NullHeuristic};
pub use problem::{Cost, IllegalTransition, SearchProblem};
