//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Budget, dedup and randomness configuration for one engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` runs until the strategy's own
    /// termination condition, which for IDS on an unsolvable puzzle is never.
    pub max_expansions: Option<u64>,
    /// Duplicate-state filtering (default: `Off`).
    pub dedup: DedupPolicy,
    /// Seed for the depth-first child shuffle. `None` seeds from entropy.
    pub shuffle_seed: Option<u64>,
}

impl SearchPolicy {
    /// Validate option ranges.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1 when set".into(),
            });
        }
        Ok(())
    }

    /// Builder-style setter for the expansion budget.
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    #[must_use]
    pub fn with_dedup(mut self, dedup: DedupPolicy) -> Self {
        self.dedup = dedup;
        self
    }

    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            dedup: DedupPolicy::Off,
            shuffle_seed: None,
        }
    }
}

/// How repeated states are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// Every generated child enters the frontier.
    #[default]
    Off,
    /// A child is admitted only if its state was never generated, or was
    /// only generated at a strictly greater depth.
    ShallowestDepth,
}
