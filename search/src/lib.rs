//! Wayfind Search: one graph-search engine, five frontier orderings.
//!
//! This crate depends only on `wayfind_kernel`; it does not depend on
//! `wayfind_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfind_kernel  ←  wayfind_search  ←  wayfind_harness
//! (contracts)        (frontier, engine)  (worlds, runner, cli)
//! ```
//!
//! # Key types
//!
//! - [`Strategy`] -- the closed set of frontier orderings, resolved by name
//! - [`SearchPolicy`] -- graph/tree flag and optional expansion budget
//! - [`SearchNode`] / [`FrontierKey`] -- search bookkeeping
//! - [`SearchOutcome`] -- a [`Solution`] or a [`Failure`], both carrying the
//!   expansion trace
//! - [`HeuristicRegistry`] -- name → heuristic constructor table
//!
//! # Entry points
//!
//! - [`search()`] -- strategy by name, the shape external callers use
//! - [`search_with_policy`] -- typed strategy plus full policy

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod registry;
pub mod report;
pub mod search;
pub mod solution;
pub mod strategy;

pub use error::{RegistryError, SearchError};
pub use node::{FrontierKey, SearchNode};
pub use policy::SearchPolicy;
pub use registry::{HeuristicCtor, HeuristicRegistry};
pub use report::ReportError;
pub use search::{search, search_with_policy};
pub use solution::{
    Failure, NoSolutionReason, PlanCursor, RunInfo, SearchOutcome, SearchStats, Solution,
};
pub use strategy::Strategy;
