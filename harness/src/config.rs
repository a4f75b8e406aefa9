//! Run configuration loaded from TOML.
//!
//! ```toml
//! strategy = "astar"
//! heuristic = "manhattan"
//! graph_search = true
//! max_expansions = 50000
//! ```
//!
//! Every field is optional. Command-line flags override file values.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wayfind_search::{SearchPolicy, Strategy};

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Strategy, heuristic and policy for one run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Strategy name: `dfs`, `bfs`, `ucs`, `greedy` or `astar`.
    pub strategy: String,
    /// Heuristic name, resolved against the world's registry.
    pub heuristic: String,
    /// Expand each state at most once.
    pub graph_search: bool,
    /// Optional cap on node expansions.
    pub max_expansions: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::UniformCost.name().to_string(),
            heuristic: "null".to_string(),
            graph_search: true,
            max_expansions: None,
        }
    }
}

impl RunConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid TOML, or
    /// fails [`RunConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error for invalid TOML or an invalid configuration.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// The strategy this configuration names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unknown strategy name.
    pub fn strategy(&self) -> Result<Strategy, ConfigError> {
        Strategy::from_name(&self.strategy).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// The engine policy for this configuration.
    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            graph_search: self.graph_search,
            max_expansions: self.max_expansions,
        }
    }

    /// Check the strategy name and policy.
    ///
    /// Heuristic names depend on the world and are checked when a run
    /// resolves them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.strategy()?;
        self.policy()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
