//! Strategy selector.

use std::fmt;

use crate::heuristic::HeuristicKind;

/// Which search loop to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Best-first (A*) over a min-priority frontier scored by the heuristic.
    BestFirst(HeuristicKind),
    BreadthFirst,
    /// Depth-first with a fresh random child order on every expansion.
    DepthFirst,
    IterativeDeepening,
}

impl Strategy {
    /// Short display name (`A*`, `BFS`, `DFS`, `IDS`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BestFirst(_) => "A*",
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::IterativeDeepening => "IDS",
        }
    }

    /// Heuristic in use, for informed strategies.
    #[must_use]
    pub const fn heuristic(self) -> Option<HeuristicKind> {
        match self {
            Self::BestFirst(kind) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BestFirst(kind) => write!(f, "A* ({kind})"),
            other => f.write_str(other.name()),
        }
    }
}
