//! Concrete-scenario lock tests.
//!
//! Pins observable results for the documented inputs: the 3×3 start with
//! optimal depth 12, the unsolvable 2×2 start, an already-solved start,
//! and the state fingerprints printed by the fixture binary.

use lock_tests::SCENARIO;
use slidetile_kernel::direction::Direction;
use slidetile_kernel::grid::Grid;
use slidetile_search::heuristic::{Heuristic, HeuristicKind, ManhattanSum};
use slidetile_search::node::MoveLabel;
use slidetile_search::policy::{DedupPolicy, SearchPolicy};
use slidetile_search::search::{SearchEngine, SearchOutcome};
use slidetile_search::strategy::Strategy;

fn scenario() -> Grid {
    Grid::from_rows(&SCENARIO).unwrap()
}

fn engine_for(start: Grid, policy: SearchPolicy) -> SearchEngine {
    let goal = Grid::goal(start.side()).unwrap();
    SearchEngine::new(start, goal, policy).unwrap()
}

#[test]
fn scenario_solves_at_depth_twelve_with_every_optimal_strategy() {
    let deduped = SearchPolicy::default().with_dedup(DedupPolicy::ShallowestDepth);
    let cases = [
        (Strategy::BestFirst(HeuristicKind::ManhattanSum), SearchPolicy::default()),
        (Strategy::BestFirst(HeuristicKind::MisplacedCount), deduped.clone()),
        (Strategy::BreadthFirst, deduped.clone()),
        (Strategy::IterativeDeepening, deduped),
    ];
    for (strategy, policy) in cases {
        let mut engine = engine_for(scenario(), policy);
        let outcome = engine.run(strategy);
        let solution = outcome.solution().copied().unwrap();
        assert_eq!(solution.depth, 12, "{strategy}");

        let moves = engine.moves(solution.node);
        assert_eq!(moves.len(), 13);
        assert_eq!(moves[0], MoveLabel::Start);
        assert!(moves[1..].iter().all(|m| m.direction().is_some()));
    }
}

#[test]
fn scenario_path_replays_and_each_step_moves_the_blank_once() {
    let mut engine = engine_for(scenario(), SearchPolicy::default());
    let solution = engine.best_first(&ManhattanSum).solution().copied().unwrap();
    let path = engine.path(solution.node);
    for pair in path.windows(2) {
        let (parent, child) = (pair[0], pair[1]);
        assert_eq!(child.depth, parent.depth + 1);
        assert_eq!(child.parent, Some(parent.id));
        let direction = child.label.direction().unwrap();
        assert_eq!(parent.state.with_move(direction).as_ref(), Some(&child.state));
    }
    assert!(path[path.len() - 1].state.is_goal(engine.goal()));
    assert_eq!(ManhattanSum.estimate(&path[path.len() - 1].state), 0);
}

#[test]
fn unsolvable_two_by_two_terminates_with_dedup() {
    let start = Grid::from_rows(&[[1, 0], [3, 2]]).unwrap();
    let policy = SearchPolicy::default().with_dedup(DedupPolicy::ShallowestDepth);
    for strategy in [
        Strategy::BestFirst(HeuristicKind::ManhattanSum),
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
    ] {
        let mut engine = engine_for(start.clone(), policy.clone().with_shuffle_seed(1));
        assert_eq!(engine.run(strategy), SearchOutcome::Exhausted, "{strategy}");
        assert!(engine.nodes_expanded() <= 36, "{strategy}");
    }
}

#[test]
fn unsolvable_two_by_two_needs_a_budget_without_dedup() {
    let start = Grid::from_rows(&[[1, 0], [3, 2]]).unwrap();
    for strategy in [
        Strategy::BestFirst(HeuristicKind::ManhattanSum),
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::IterativeDeepening,
    ] {
        let policy = SearchPolicy::default()
            .with_max_expansions(200)
            .with_shuffle_seed(3);
        let mut engine = engine_for(start.clone(), policy);
        assert_eq!(engine.run(strategy), SearchOutcome::BudgetExhausted, "{strategy}");
        assert_eq!(engine.nodes_expanded(), 200, "{strategy}");
    }
}

#[test]
fn already_solved_start_needs_no_expansion() {
    for side in 2..=4 {
        let mut engine = engine_for(Grid::goal(side).unwrap(), SearchPolicy::default());
        let outcome = engine.iterative_deepening();
        let solution = outcome.solution().copied().unwrap();
        assert_eq!(solution.depth, 0);
        assert_eq!(solution.nodes_expanded, 0);
        assert_eq!(solution.depth_limit, Some(0));
    }
}

#[test]
fn single_move_from_goal() {
    let start = scenario_goal_neighbor();
    let mut engine = engine_for(start, SearchPolicy::default());
    let solution = engine.breadth_first().solution().copied().unwrap();
    assert_eq!(solution.depth, 1);
    assert_eq!(engine.moves(solution.node), vec![MoveLabel::Start, MoveLabel::Up]);
}

fn scenario_goal_neighbor() -> Grid {
    // Goal with the blank pushed down one row.
    Grid::goal(3).unwrap().with_move(Direction::Down).unwrap()
}

#[test]
fn fingerprints_are_pinned() {
    assert_eq!(
        Grid::goal(3).unwrap().fingerprint().to_string(),
        "sha256:7ccf739b618a91acf57a55585da8ac42b11a5f7a68810583015e4a5b960a1a9d"
    );
    assert_eq!(
        Grid::goal(2).unwrap().fingerprint().to_string(),
        "sha256:69e50eb970dd48e95ade4d50d064ec48ee5c3eb31951af5a254c047b82b87dcc"
    );
    assert_eq!(
        scenario().fingerprint().to_string(),
        "sha256:6de76ca82ab451058fa1d9101f1692b473d82ca954a245903a4f45d82e0888d0"
    );
}
