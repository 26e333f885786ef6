//! Shared helpers for slidetile benchmark suites.

use rand::rngs::StdRng;
use rand::SeedableRng;

use slidetile_kernel::grid::Grid;
use slidetile_search::policy::{DedupPolicy, SearchPolicy};
use slidetile_search::search::{SearchEngine, SearchOutcome};
use slidetile_search::strategy::Strategy;

/// A start grid plus the policy a benchmark runs it under.
#[derive(Debug, Clone)]
pub struct Instance {
    pub name: &'static str,
    pub start: Grid,
    pub policy: SearchPolicy,
}

/// The documented 3×3 start (optimal depth 12), duplicate filtering on.
///
/// # Panics
///
/// Never for the built-in rows; benchmark setup failures are fatal.
#[must_use]
pub fn instance_scenario() -> Instance {
    Instance {
        name: "scenario_d12",
        start: Grid::from_rows(&[[3, 2, 5], [7, 0, 8], [4, 1, 6]]).expect("scenario grid"),
        policy: SearchPolicy::default().with_dedup(DedupPolicy::ShallowestDepth),
    }
}

/// A solvable start `moves` blank steps from the goal.
///
/// # Panics
///
/// Panics if `side < 2`.
#[must_use]
pub fn instance_scrambled(name: &'static str, side: usize, moves: usize, seed: u64) -> Instance {
    let grid =
        Grid::scrambled(side, moves, &mut StdRng::seed_from_u64(seed)).expect("side >= 2");
    Instance {
        name,
        start: grid,
        policy: SearchPolicy::default()
            .with_dedup(DedupPolicy::ShallowestDepth)
            .with_shuffle_seed(seed),
    }
}

/// The unsolvable 2×2 start with a fixed expansion budget and no filtering:
/// measures raw expansion throughput.
///
/// # Panics
///
/// Never for the built-in rows.
#[must_use]
pub fn instance_unsolvable_budget(max_expansions: u64) -> Instance {
    Instance {
        name: "unsolvable_2x2_budget",
        start: Grid::from_rows(&[[1, 0], [3, 2]]).expect("2x2 grid"),
        policy: SearchPolicy::default()
            .with_max_expansions(max_expansions)
            .with_shuffle_seed(0),
    }
}

/// Build a fresh engine and run one strategy.
///
/// # Panics
///
/// Panics if the instance's policy is invalid.
#[must_use]
pub fn run_strategy(instance: &Instance, strategy: Strategy) -> SearchOutcome {
    let goal = Grid::goal(instance.start.side()).expect("side >= 2");
    let mut engine = SearchEngine::new(instance.start.clone(), goal, instance.policy.clone())
        .expect("valid instance policy");
    engine.run(strategy)
}
