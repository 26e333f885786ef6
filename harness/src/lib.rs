//! Slidetile Harness: configuration, orchestration and reporting.
//!
//! The harness turns a [`RunConfig`](config::RunConfig) into grids and a
//! search policy, runs one strategy through
//! [`SearchEngine`](slidetile_search::search::SearchEngine), and packages the
//! outcome as a serializable [`RunReport`](runner::RunReport).
//!
//! The harness does NOT implement search logic; it delegates to
//! `slidetile_search`.
//!
//! ```text
//! RunConfig::load() → validate() → build start/goal → SearchEngine::run()
//!   → RunReport → (optional) write_report() → render for the console
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod logging;
pub mod render;
pub mod runner;
