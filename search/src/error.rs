//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Running out of states
//! or out of budget is not an error: it is reported through
//! [`crate::search::SearchOutcome`].

use thiserror::Error;

/// Typed failure for pre-flight engine validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Start and goal grids have different side lengths.
    #[error("start grid has side {start} but goal grid has side {goal}")]
    SideMismatch { start: usize, goal: usize },

    /// A policy option is out of range.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
