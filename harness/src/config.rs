//! File-level run configuration.
//!
//! Configurations are JSON objects. Every key is optional:
//!
//! ```json
//! {
//!   "start": [[3, 2, 5], [7, 0, 8], [4, 1, 6]],
//!   "strategy": "best_first",
//!   "heuristic": "manhattan_sum",
//!   "dedup": "off",
//!   "seed": 7,
//!   "max_expansions": 100000,
//!   "show_steps": true,
//!   "report_path": "report.json"
//! }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use slidetile_search::heuristic::HeuristicKind;
use slidetile_search::policy::{DedupPolicy, SearchPolicy};
use slidetile_search::strategy::Strategy;

/// Start grid used when neither `start` nor `random_side` is given.
pub const DEFAULT_START: [[u32; 3]; 3] = [[3, 2, 5], [7, 0, 8], [4, 1, 6]];

/// Errors that can occur when loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Strategy selector as it appears in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyName {
    #[default]
    #[serde(alias = "a_star")]
    BestFirst,
    #[serde(alias = "bfs")]
    BreadthFirst,
    #[serde(alias = "dfs")]
    DepthFirst,
    #[serde(alias = "ids")]
    IterativeDeepening,
}

impl StrategyName {
    /// Bind the configured heuristic (used by best-first only).
    #[must_use]
    pub fn with_heuristic(self, heuristic: HeuristicKind) -> Strategy {
        match self {
            Self::BestFirst => Strategy::BestFirst(heuristic),
            Self::BreadthFirst => Strategy::BreadthFirst,
            Self::DepthFirst => Strategy::DepthFirst,
            Self::IterativeDeepening => Strategy::IterativeDeepening,
        }
    }
}

impl fmt::Display for StrategyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BestFirst => "best_first",
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::IterativeDeepening => "iterative_deepening",
        })
    }
}

/// One harness run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Explicit start rows. `None` uses [`DEFAULT_START`].
    pub start: Option<Vec<Vec<u32>>>,
    /// Side of the canonical goal. Defaults to the start's side.
    pub goal_side: Option<usize>,
    /// Generate a random start of this side instead of using `start`.
    pub random_side: Option<usize>,
    pub strategy: StrategyName,
    /// Heuristic for best-first search; ignored by the other strategies.
    pub heuristic: HeuristicKind,
    pub dedup: DedupPolicy,
    /// Seeds both the random start and the depth-first shuffle.
    pub seed: Option<u64>,
    pub max_expansions: Option<u64>,
    /// Include every intermediate grid in the report.
    pub show_steps: bool,
    /// Write the JSON report here after the run.
    pub report_path: Option<PathBuf>,
}

impl RunConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON, unknown keys or invalid
    /// combinations.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks combinations serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start.is_some() && self.random_side.is_some() {
            return Err(ConfigError::Invalid(
                "start and random_side are mutually exclusive".into(),
            ));
        }
        if self.max_expansions == Some(0) {
            return Err(ConfigError::Invalid(
                "max_expansions must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The strategy to run, with the configured heuristic bound.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy.with_heuristic(self.heuristic)
    }

    /// Engine policy derived from the file settings.
    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_expansions: self.max_expansions,
            dedup: self.dedup,
            shuffle_seed: self.seed,
        }
    }

    /// Sets the start rows.
    #[must_use]
    pub fn with_start<R: AsRef<[u32]>>(mut self, rows: &[R]) -> Self {
        self.start = Some(rows.iter().map(|r| r.as_ref().to_vec()).collect());
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyName) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_dedup(mut self, dedup: DedupPolicy) -> Self {
        self.dedup = dedup;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
