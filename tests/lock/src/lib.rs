//! Shared fixtures for the lock tests.
//!
//! - [`optimal_depth`]: an independent breadth-first oracle over raw grids,
//!   used to check the engine's optimal strategies.
//! - [`scrambled`]: solvable starts made by walking the blank away from the
//!   goal.
//! - [`fixture_report`]: the deterministic output of the `search_fixture`
//!   binary, computable in-process for comparison.

use std::collections::{HashSet, VecDeque};
use std::error::Error;
use std::fmt::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;

use slidetile_kernel::direction::Direction;
use slidetile_kernel::error::GridError;
use slidetile_kernel::grid::Grid;
use slidetile_search::heuristic::HeuristicKind;
use slidetile_search::node::MoveLabel;
use slidetile_search::policy::{DedupPolicy, SearchPolicy};
use slidetile_search::search::{SearchEngine, SearchOutcome};
use slidetile_search::strategy::Strategy;

/// The 3×3 start used throughout the documentation. Optimal depth 12.
pub const SCENARIO: [[u32; 3]; 3] = [[3, 2, 5], [7, 0, 8], [4, 1, 6]];

/// 3×3 starts (row-major) with their optimal depths.
pub const SHALLOW_CASES: &[([u32; 9], u32)] = &[
    ([3, 1, 2, 0, 4, 5, 6, 7, 8], 1),
    ([1, 2, 0, 3, 4, 5, 6, 7, 8], 2),
    ([1, 4, 2, 3, 0, 5, 6, 7, 8], 2),
    ([3, 1, 2, 6, 4, 5, 0, 7, 8], 2),
    ([3, 1, 2, 4, 0, 5, 6, 7, 8], 2),
    ([1, 2, 5, 3, 4, 0, 6, 7, 8], 3),
    ([1, 4, 2, 3, 5, 0, 6, 7, 8], 3),
];

/// Minimum number of moves from `start` to the canonical goal, or `None` if
/// the goal is unreachable.
///
/// Explores the whole reachable component in the worst case; keep inputs to
/// 2×2 or shallow 3×3 puzzles.
#[must_use]
pub fn optimal_depth(start: &Grid) -> Option<u32> {
    let goal = Grid::goal(start.side()).ok()?;
    let mut seen: HashSet<Grid> = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([(start.clone(), 0u32)]);
    while let Some((grid, depth)) = queue.pop_front() {
        if grid.is_goal(&goal) {
            return Some(depth);
        }
        for direction in Direction::ALL {
            if let Some(next) = grid.with_move(direction) {
                if seen.insert(next.clone()) {
                    queue.push_back((next, depth + 1));
                }
            }
        }
    }
    None
}

/// A seeded [`Grid::scrambled`] start: solvable in at most `moves` moves.
///
/// # Errors
///
/// Returns [`GridError::TooSmall`] if `side < 2`.
pub fn scrambled(side: usize, moves: usize, seed: u64) -> Result<Grid, GridError> {
    Grid::scrambled(side, moves, &mut StdRng::seed_from_u64(seed))
}

fn describe(out: &mut String, key: &str, engine: &SearchEngine, outcome: &SearchOutcome) {
    let _ = writeln!(out, "{key}.termination={}", outcome.termination());
    let _ = writeln!(out, "{key}.nodes_expanded={}", engine.stats().nodes_expanded);
    let _ = writeln!(out, "{key}.nodes_generated={}", engine.stats().nodes_generated);
    if let Some(solution) = outcome.solution() {
        let moves: Vec<&str> = engine
            .moves(solution.node)
            .into_iter()
            .map(MoveLabel::as_str)
            .collect();
        let _ = writeln!(out, "{key}.depth={}", solution.depth);
        let _ = writeln!(out, "{key}.moves={}", moves.join(","));
    }
}

/// Deterministic `key=value` lines: one seeded run of every strategy.
///
/// # Errors
///
/// Returns an error if a fixture grid or engine cannot be built.
pub fn fixture_report() -> Result<String, Box<dyn Error + Send + Sync>> {
    let start = Grid::from_rows(&SCENARIO)?;
    let goal = Grid::goal(3)?;
    let mut out = String::new();
    let _ = writeln!(out, "start_fingerprint={}", start.fingerprint());
    let _ = writeln!(out, "goal_fingerprint={}", goal.fingerprint());

    let runs: [(&str, Strategy, SearchPolicy); 5] = [
        (
            "a_star_manhattan",
            Strategy::BestFirst(HeuristicKind::ManhattanSum),
            SearchPolicy::default(),
        ),
        (
            "a_star_misplaced",
            Strategy::BestFirst(HeuristicKind::MisplacedCount),
            SearchPolicy::default().with_dedup(DedupPolicy::ShallowestDepth),
        ),
        (
            "bfs",
            Strategy::BreadthFirst,
            SearchPolicy::default().with_dedup(DedupPolicy::ShallowestDepth),
        ),
        (
            "dfs",
            Strategy::DepthFirst,
            SearchPolicy::default()
                .with_dedup(DedupPolicy::ShallowestDepth)
                .with_shuffle_seed(42)
                .with_max_expansions(5_000),
        ),
        (
            "ids",
            Strategy::IterativeDeepening,
            SearchPolicy::default()
                .with_dedup(DedupPolicy::ShallowestDepth)
                .with_max_expansions(20_000),
        ),
    ];

    for (key, strategy, policy) in runs {
        let mut engine = SearchEngine::new(start.clone(), goal.clone(), policy)?;
        let outcome = engine.run(strategy);
        describe(&mut out, key, &engine, &outcome);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_agrees_with_known_depths() {
        assert_eq!(optimal_depth(&Grid::from_rows(&SCENARIO).unwrap()), Some(12));
        for (cells, depth) in SHALLOW_CASES {
            let grid = Grid::from_values(3, cells).unwrap();
            assert_eq!(optimal_depth(&grid), Some(*depth), "{cells:?}");
        }
    }

    #[test]
    fn oracle_reports_unreachable_goal() {
        let grid = Grid::from_rows(&[[1, 0], [3, 2]]).unwrap();
        assert_eq!(optimal_depth(&grid), None);
    }

    #[test]
    fn scramble_is_bounded_by_walk_length() {
        for seed in 0..5 {
            let grid = scrambled(3, 10, seed).unwrap();
            let depth = optimal_depth(&grid).unwrap();
            assert!(depth <= 10);
            assert_eq!(depth % 2, 0, "depth parity follows walk length");
        }
    }
}
