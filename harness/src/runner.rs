//! Harness runner: builds grids from a [`RunConfig`], runs one strategy and
//! packages the result.
//!
//! The runner only calls kernel and search APIs; it adds wall-clock timing
//! and reporting around [`SearchEngine::run`].

use std::path::Path;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::info;

use slidetile_kernel::error::GridError;
use slidetile_kernel::grid::Grid;
use slidetile_search::error::SearchError;
use slidetile_search::heuristic::HeuristicKind;
use slidetile_search::node::MoveLabel;
use slidetile_search::search::{SearchEngine, SearchOutcome};
use slidetile_search::strategy::Strategy;

use crate::config::{ConfigError, RunConfig, DEFAULT_START};

/// Error during a harness run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("search setup failed: {0}")]
    Search(#[from] SearchError),

    #[error("report I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("report serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn serialize_rows<S: Serializer>(grid: &Grid, serializer: S) -> Result<S::Ok, S::Error> {
    grid.rows().serialize(serializer)
}

/// One state on the solution path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// Move that produced this state (`START` for the root).
    pub label: &'static str,
    #[serde(rename = "rows", serialize_with = "serialize_rows")]
    pub grid: Grid,
}

/// Everything one run produced, ready for JSON or the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Strategy short name (`A*`, `BFS`, `DFS`, `IDS`).
    pub strategy: &'static str,
    /// Heuristic in use, for best-first runs.
    pub heuristic: Option<HeuristicKind>,
    pub solved: bool,
    /// `solved`, `exhausted` or `budget_exhausted`.
    pub termination: &'static str,
    /// Solution depth (= number of moves).
    pub depth: Option<u32>,
    /// Final depth limit of an iterative-deepening run.
    pub depth_limit: Option<u32>,
    /// Move labels from the root, starting with `START`. Empty when unsolved.
    pub moves: Vec<&'static str>,
    pub nodes_expanded: u64,
    pub nodes_generated: u64,
    pub duplicates_suppressed: u64,
    pub frontier_high_water: u64,
    pub elapsed_micros: u64,
    #[serde(serialize_with = "serialize_rows")]
    pub start: Grid,
    #[serde(serialize_with = "serialize_rows")]
    pub goal: Grid,
    /// Every state on the path; filled only when `show_steps` is set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepReport>,
}

impl RunReport {
    fn from_engine(
        engine: &SearchEngine,
        strategy: Strategy,
        outcome: SearchOutcome,
        elapsed_micros: u64,
        show_steps: bool,
    ) -> Self {
        let stats = engine.stats();
        let solution = outcome.solution().copied();
        let moves = solution
            .map(|s| engine.moves(s.node).into_iter().map(MoveLabel::as_str).collect())
            .unwrap_or_default();
        let steps = match solution {
            Some(s) if show_steps => engine
                .path(s.node)
                .into_iter()
                .map(|node| StepReport {
                    label: node.label.as_str(),
                    grid: node.state.clone(),
                })
                .collect(),
            _ => Vec::new(),
        };
        Self {
            strategy: strategy.name(),
            heuristic: strategy.heuristic(),
            solved: outcome.is_solved(),
            termination: outcome.termination(),
            depth: solution.map(|s| s.depth),
            depth_limit: stats.depth_limit,
            moves,
            nodes_expanded: stats.nodes_expanded,
            nodes_generated: stats.nodes_generated,
            duplicates_suppressed: stats.duplicates_suppressed,
            frontier_high_water: stats.frontier_high_water,
            elapsed_micros,
            start: engine.root().state.clone(),
            goal: engine.goal().clone(),
            steps,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, RunError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write `report` to `path` as pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`RunError::Io`] or [`RunError::Json`].
pub fn write_report(report: &RunReport, path: &Path) -> Result<(), RunError> {
    let mut json = report.to_json()?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}

/// Build the start grid the configuration names.
///
/// # Errors
///
/// Returns [`RunError::Grid`] if the rows (or random side) are invalid.
pub fn build_start(config: &RunConfig) -> Result<Grid, RunError> {
    let grid = match (&config.start, config.random_side) {
        (_, Some(side)) => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Grid::random(side, &mut rng)?
        }
        (Some(rows), None) => Grid::from_rows(rows)?,
        (None, None) => Grid::from_rows(&DEFAULT_START)?,
    };
    Ok(grid)
}

/// Run the configured strategy once.
///
/// A run that finds no solution still returns `Ok`; check
/// [`RunReport::solved`].
///
/// # Errors
///
/// Returns [`RunError`] if the configuration or grids are invalid, or if the
/// report cannot be written.
pub fn run(config: &RunConfig) -> Result<RunReport, RunError> {
    config.validate()?;
    let start = build_start(config)?;
    let goal = Grid::goal(config.goal_side.unwrap_or(start.side()))?;
    let strategy = config.strategy();

    let mut engine = SearchEngine::new(start, goal, config.policy())?;
    info!(event = "run_start", strategy = %strategy, side = engine.goal().side());

    let started = Instant::now();
    let outcome = engine.run(strategy);
    let elapsed_micros = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    let report =
        RunReport::from_engine(&engine, strategy, outcome, elapsed_micros, config.show_steps);
    info!(
        event = "run_end",
        strategy = %strategy,
        termination = report.termination,
        elapsed_micros,
    );

    if let Some(path) = &config.report_path {
        write_report(&report, path)?;
    }
    Ok(report)
}
