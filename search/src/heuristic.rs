//! Heuristic evaluators for best-first search.
//!
//! Every evaluator measures distance to the canonical row-major goal of the
//! state's own side length: value `v` belongs at `(v / side, v % side)`.
//! [`evaluate`] writes `cost = depth + estimate` into a node.
//!
//! The blank is not a tile and is never counted. With that convention
//! [`ManhattanSum`] and [`MisplacedCount`] are admissible for the canonical
//! goal. The two neighbor-restricted variants only look at the (at most
//! four) tiles touching the blank.

use std::fmt;

use serde::{Deserialize, Serialize};
use slidetile_kernel::grid::Grid;
use slidetile_kernel::tile::Tile;

use crate::node::SearchNode;

/// Trait for remaining-cost estimates.
///
/// Implementations must be pure: same state, same estimate.
pub trait Heuristic: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Estimated number of moves from `state` to the canonical goal.
    fn estimate(&self, state: &Grid) -> i64;
}

/// Overwrite `node.cost` with `depth + heuristic.estimate(state)`.
pub fn evaluate(node: &mut SearchNode, heuristic: &dyn Heuristic) {
    node.cost = i64::from(node.depth).saturating_add(heuristic.estimate(&node.state));
}

fn to_cost(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn tiles_only(tiles: impl Iterator<Item = Tile>) -> impl Iterator<Item = Tile> {
    tiles.filter(|t| !t.is_blank())
}

/// Sum of every tile's Manhattan distance to its goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanSum;

impl Heuristic for ManhattanSum {
    fn name(&self) -> &'static str {
        "manhattan_sum"
    }

    fn estimate(&self, state: &Grid) -> i64 {
        let side = state.side();
        to_cost(tiles_only(state.tiles()).map(|t| t.goal_distance(side)).sum())
    }
}

/// Number of tiles away from their goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedCount;

impl Heuristic for MisplacedCount {
    fn name(&self) -> &'static str {
        "misplaced_count"
    }

    fn estimate(&self, state: &Grid) -> i64 {
        let side = state.side();
        to_cost(tiles_only(state.tiles()).filter(|t| t.is_misplaced(side)).count())
    }
}

/// Misplaced count restricted to the tiles adjacent to the blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborMisplacedCount;

impl Heuristic for NeighborMisplacedCount {
    fn name(&self) -> &'static str {
        "neighbor_misplaced_count"
    }

    fn estimate(&self, state: &Grid) -> i64 {
        let side = state.side();
        to_cost(state.neighbors().filter(|t| t.is_misplaced(side)).count())
    }
}

/// Manhattan sum restricted to the tiles adjacent to the blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborManhattanSum;

impl Heuristic for NeighborManhattanSum {
    fn name(&self) -> &'static str {
        "neighbor_manhattan_sum"
    }

    fn estimate(&self, state: &Grid) -> i64 {
        let side = state.side();
        to_cost(state.neighbors().map(|t| t.goal_distance(side)).sum())
    }
}

/// Configuration-level selector for the built-in evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    #[default]
    ManhattanSum,
    MisplacedCount,
    NeighborMisplacedCount,
    NeighborManhattanSum,
}

impl HeuristicKind {
    pub const ALL: [Self; 4] = [
        Self::ManhattanSum,
        Self::MisplacedCount,
        Self::NeighborMisplacedCount,
        Self::NeighborManhattanSum,
    ];

    /// The evaluator this kind names.
    #[must_use]
    pub fn heuristic(self) -> &'static dyn Heuristic {
        match self {
            Self::ManhattanSum => &ManhattanSum,
            Self::MisplacedCount => &MisplacedCount,
            Self::NeighborMisplacedCount => &NeighborMisplacedCount,
            Self::NeighborManhattanSum => &NeighborManhattanSum,
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heuristic().name())
    }
}
