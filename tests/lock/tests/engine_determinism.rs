//! In-process determinism and isolation lock tests.
//!
//! - Repeated runs with the same inputs and seed yield identical outcomes,
//!   paths and counters.
//! - Independent engines on separate threads do not interfere.
//! - A strategy run leaves nothing behind that changes the next run.

use std::thread;

use lock_tests::{fixture_report, scrambled, SCENARIO};
use slidetile_kernel::grid::Grid;
use slidetile_search::heuristic::HeuristicKind;
use slidetile_search::node::MoveLabel;
use slidetile_search::policy::{DedupPolicy, SearchPolicy};
use slidetile_search::search::{SearchEngine, SearchStats};
use slidetile_search::strategy::Strategy;

fn run_once(start: &Grid, strategy: Strategy, policy: &SearchPolicy) -> (Vec<MoveLabel>, SearchStats) {
    let goal = Grid::goal(start.side()).unwrap();
    let mut engine = SearchEngine::new(start.clone(), goal, policy.clone()).unwrap();
    let outcome = engine.run(strategy);
    let moves = outcome
        .solution()
        .map(|s| engine.moves(s.node))
        .unwrap_or_default();
    (moves, engine.stats().clone())
}

#[test]
fn fixture_report_is_stable_n10() {
    let first = fixture_report().unwrap();
    for i in 1..=10 {
        assert_eq!(fixture_report().unwrap(), first, "run {i}: fixture output differs");
    }
}

#[test]
fn seeded_depth_first_repeats_exactly() {
    let start = scrambled(3, 16, 5).unwrap();
    let policy = SearchPolicy::default()
        .with_dedup(DedupPolicy::ShallowestDepth)
        .with_shuffle_seed(1234)
        .with_max_expansions(3_000);
    let first = run_once(&start, Strategy::DepthFirst, &policy);
    for i in 1..=5 {
        assert_eq!(
            run_once(&start, Strategy::DepthFirst, &policy),
            first,
            "run {i}: seeded DFS differs"
        );
    }
}

#[test]
fn different_seeds_may_take_different_paths_but_all_reach_goal() {
    let start = Grid::from_rows(&[[3, 2], [1, 0]]).unwrap();
    for seed in 0..16 {
        let policy = SearchPolicy::default().with_shuffle_seed(seed);
        let (moves, _) = run_once(&start, Strategy::DepthFirst, &policy);
        let directions = moves.iter().filter_map(|m| m.direction());
        let end = start.apply_moves(directions).unwrap();
        assert!(end.is_goal(&Grid::goal(2).unwrap()), "seed {seed}");
    }
}

#[test]
fn concurrent_engines_match_sequential_results() {
    let start = Grid::from_rows(&SCENARIO).unwrap();
    let strategies = [
        Strategy::BestFirst(HeuristicKind::ManhattanSum),
        Strategy::BestFirst(HeuristicKind::MisplacedCount),
        Strategy::BreadthFirst,
    ];
    let policy = SearchPolicy::default().with_dedup(DedupPolicy::ShallowestDepth);

    let sequential: Vec<_> = strategies
        .iter()
        .map(|&s| run_once(&start, s, &policy))
        .collect();

    let concurrent: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = strategies
            .iter()
            .map(|&s| {
                let start = &start;
                let policy = &policy;
                scope.spawn(move || run_once(start, s, policy))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
}

#[test]
fn strategies_on_one_engine_do_not_leak() {
    let start = scrambled(3, 12, 9).unwrap();
    let goal = Grid::goal(3).unwrap();
    let policy = SearchPolicy::default().with_dedup(DedupPolicy::ShallowestDepth);
    let mut shared = SearchEngine::new(start.clone(), goal, policy.clone()).unwrap();

    for strategy in [
        Strategy::BreadthFirst,
        Strategy::BestFirst(HeuristicKind::ManhattanSum),
        Strategy::IterativeDeepening,
        Strategy::BreadthFirst,
    ] {
        let outcome = shared.run(strategy);
        let moves = outcome
            .solution()
            .map(|s| shared.moves(s.node))
            .unwrap_or_default();
        let fresh = run_once(&start, strategy, &policy);
        assert_eq!((moves, shared.stats().clone()), fresh, "{strategy}");
    }
}
