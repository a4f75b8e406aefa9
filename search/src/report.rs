//! Canonical search report and fixture digests.
//!
//! A report is the machine-readable surface of one search: what ran, how it
//! ended, the plan, and the expansion trace. States and actions are embedded
//! through their `serde` representation and must serialize to integers,
//! strings, booleans, arrays or objects. Floats are rejected by the
//! canonicalizer.

use serde::Serialize;
use serde_json::{json, Value};
use wayfind_kernel::proof::canon::{canonical_json_bytes, CanonError};
use wayfind_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::solution::{SearchOutcome, SearchStats, Solution};

/// Failure to render a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A state or action could not be converted to JSON.
    #[error("failed to serialize search value: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The JSON contained a value the canonicalizer rejects.
    #[error(transparent)]
    Canon(#[from] CanonError),
}

impl<S: Serialize, A: Serialize> SearchOutcome<S, A> {
    /// The report as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] if a state or action fails to
    /// serialize.
    pub fn to_json_value(&self) -> Result<Value, ReportError> {
        let run = self.run();
        let termination = match self {
            Self::Found(_) => "goal_reached",
            Self::NoSolution(failure) => failure.reason.as_str(),
        };
        let (actions, cost) = match self {
            Self::Found(solution) => (serde_json::to_value(&solution.actions)?, json!(solution.cost)),
            Self::NoSolution(_) => (Value::Null, Value::Null),
        };
        Ok(json!({
            "actions": actions,
            "cost": cost,
            "expanded": serde_json::to_value(self.expanded())?,
            "graph_search": run.graph_search,
            "problem_id": run.problem_id,
            "stats": stats_to_json(self.stats()),
            "strategy": run.strategy.name(),
            "termination": termination,
        }))
    }

    /// The report as canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if serialization or canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, ReportError> {
        Ok(canonical_json_bytes(&self.to_json_value()?)?)
    }

    /// Digest of the full report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if serialization or canonicalization fails.
    pub fn report_digest(&self) -> Result<ContentHash, ReportError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchReport, &bytes))
    }

    /// Digest of the expansion trace alone.
    ///
    /// Two runs with the same digest expanded the same states in the same
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if serialization or canonicalization fails.
    pub fn trace_digest(&self) -> Result<ContentHash, ReportError> {
        let value = serde_json::to_value(self.expanded())?;
        let bytes = canonical_json_bytes(&value)?;
        Ok(canonical_hash(HashDomain::ExpansionTrace, &bytes))
    }
}

impl<S, A: Serialize> Solution<S, A> {
    /// Digest of the action sequence and its cost.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if an action fails to serialize.
    pub fn plan_digest(&self) -> Result<ContentHash, ReportError> {
        let value = json!({
            "actions": serde_json::to_value(&self.actions)?,
            "cost": self.cost,
        });
        let bytes = canonical_json_bytes(&value)?;
        Ok(canonical_hash(HashDomain::SolutionPlan, &bytes))
    }
}

fn stats_to_json(stats: &SearchStats) -> Value {
    json!({
        "duplicates_suppressed": stats.duplicates_suppressed,
        "expansions": stats.expansions,
        "frontier_high_water": stats.frontier_high_water,
        "nodes_generated": stats.nodes_generated,
        "stale_pops": stats.stale_pops,
    })
}
