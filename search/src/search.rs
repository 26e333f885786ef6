//! Search engine and the four strategy loops.
//!
//! Every strategy shares one shape: pop a node, stop if it matches the goal,
//! otherwise expand it, push the admitted children and count the expansion.
//! The strategies differ only in frontier discipline and in what happens to
//! a child list before it is pushed:
//!
//! | Strategy | Frontier | Child preparation |
//! |---|---|---|
//! | best-first | [`PriorityFrontier`] | cost written by the heuristic |
//! | breadth-first | [`FifoFrontier`] | none |
//! | depth-first | [`LifoFrontier`] | shuffled, fresh permutation per node |
//! | iterative deepening | [`LifoFrontier`] | children deeper than the limit dropped |
//!
//! Running out of frontier is reported as [`SearchOutcome::Exhausted`], never
//! as an error.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use slidetile_kernel::grid::Grid;

use crate::error::SearchError;
use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier, VisitedTable};
use crate::heuristic::{evaluate, Heuristic};
use crate::node::{MoveLabel, NodeId, SearchNode};
use crate::policy::{DedupPolicy, SearchPolicy};
use crate::strategy::Strategy;
use crate::tree::SearchTree;

/// A goal node together with the counters at the moment it was popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// Handle of the goal node in the engine's tree.
    pub node: NodeId,
    /// Depth of the goal node (= number of moves).
    pub depth: u32,
    pub nodes_expanded: u64,
    /// Depth limit of the successful pass (iterative deepening only).
    pub depth_limit: Option<u32>,
}

/// How a strategy run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// `max_expansions` was reached first.
    BudgetExhausted,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    /// Stable snake-case tag for logs and reports.
    #[must_use]
    pub const fn termination(&self) -> &'static str {
        match self {
            Self::Solved(_) => "solved",
            Self::Exhausted => "exhausted",
            Self::BudgetExhausted => "budget_exhausted",
        }
    }
}

/// Counters for the most recent run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_expanded: u64,
    /// Children admitted into the tree.
    pub nodes_generated: u64,
    /// Children rejected by the duplicate-state table.
    pub duplicates_suppressed: u64,
    pub frontier_high_water: u64,
    /// Final depth limit (iterative deepening only).
    pub depth_limit: Option<u32>,
}

/// Owns one root, one goal, and the counters of the run in progress.
///
/// Each strategy call starts from scratch: the tree is cut back to its root
/// and the counters are zeroed. Nothing is shared between engines, so
/// independent engines may run on separate threads.
#[derive(Debug)]
pub struct SearchEngine {
    tree: SearchTree,
    goal: Grid,
    policy: SearchPolicy,
    rng: StdRng,
    visited: VisitedTable,
    stats: SearchStats,
}

impl SearchEngine {
    /// Create an engine rooted at `start` (labelled `START`).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SideMismatch`] if the grids differ in size, or
    /// [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn new(start: Grid, goal: Grid, policy: SearchPolicy) -> Result<Self, SearchError> {
        Self::from_tree(SearchTree::with_root(start), goal, policy)
    }

    /// Create an engine over an existing tree. Only its root is kept.
    ///
    /// # Errors
    ///
    /// Same as [`SearchEngine::new`].
    pub fn from_tree(
        mut tree: SearchTree,
        goal: Grid,
        policy: SearchPolicy,
    ) -> Result<Self, SearchError> {
        policy.validate()?;
        let start_side = tree[tree.root()].state.side();
        if start_side != goal.side() {
            return Err(SearchError::SideMismatch {
                start: start_side,
                goal: goal.side(),
            });
        }
        tree.truncate_to_root();
        let rng = seeded_rng(&policy);
        Ok(Self {
            tree,
            goal,
            policy,
            rng,
            visited: VisitedTable::new(),
            stats: SearchStats::default(),
        })
    }

    /// Dispatch to the strategy's entry point.
    pub fn run(&mut self, strategy: Strategy) -> SearchOutcome {
        match strategy {
            Strategy::BestFirst(kind) => self.best_first(kind.heuristic()),
            Strategy::BreadthFirst => self.breadth_first(),
            Strategy::DepthFirst => self.depth_first(),
            Strategy::IterativeDeepening => self.iterative_deepening(),
        }
    }

    /// Best-first search ordered by `depth + heuristic`, deeper nodes
    /// winning cost ties.
    ///
    /// Without a duplicate-state table this never returns on an unsolvable
    /// puzzle unless a budget is set.
    pub fn best_first(&mut self, heuristic: &dyn Heuristic) -> SearchOutcome {
        const NAME: &str = "best_first";
        self.begin_run(NAME);
        let root = self.tree.root();
        if let Some(node) = self.tree.get_mut(root) {
            evaluate(node, heuristic);
        }
        let mut frontier = PriorityFrontier::new();
        frontier.push(&self.tree[root]);
        let outcome = self.drive(&mut frontier, |engine, children| {
            for &child in children.iter() {
                if let Some(node) = engine.tree.get_mut(child) {
                    evaluate(node, heuristic);
                }
            }
        });
        self.finish(NAME, frontier.high_water(), outcome)
    }

    /// Breadth-first search. The first goal popped has minimum depth.
    pub fn breadth_first(&mut self) -> SearchOutcome {
        const NAME: &str = "breadth_first";
        self.begin_run(NAME);
        let mut frontier = FifoFrontier::new();
        frontier.push(&self.tree[self.tree.root()]);
        let outcome = self.drive(&mut frontier, |_, _| {});
        self.finish(NAME, frontier.high_water(), outcome)
    }

    /// Depth-first search with a freshly shuffled child order per expansion.
    pub fn depth_first(&mut self) -> SearchOutcome {
        const NAME: &str = "depth_first";
        self.begin_run(NAME);
        let mut frontier = LifoFrontier::new();
        frontier.push(&self.tree[self.tree.root()]);
        let outcome = self.drive(&mut frontier, |engine, children| {
            children.shuffle(&mut engine.rng);
        });
        self.finish(NAME, frontier.high_water(), outcome)
    }

    /// Depth-limited DFS passes with the limit raised by one whenever a pass
    /// empties the stack. Each pass rebuilds the tree from the root.
    ///
    /// Never returns on an unsolvable puzzle unless a budget is set.
    pub fn iterative_deepening(&mut self) -> SearchOutcome {
        const NAME: &str = "iterative_deepening";
        self.begin_run(NAME);
        let root = self.tree.root();
        let mut depth_limit = 0u32;
        let mut frontier = LifoFrontier::new();
        frontier.push(&self.tree[root]);

        let outcome = loop {
            let Some(id) = frontier.pop() else {
                break SearchOutcome::Exhausted;
            };
            if self.is_goal(id) {
                break self.solved(id, Some(depth_limit));
            }
            if self.budget_spent() {
                break SearchOutcome::BudgetExhausted;
            }
            for child in self.expand_admitted(id, Some(depth_limit)) {
                frontier.push(&self.tree[child]);
            }
            self.stats.nodes_expanded += 1;

            if frontier.is_empty() {
                depth_limit = depth_limit.saturating_add(1);
                self.tree.truncate_to_root();
                self.reset_visited();
                frontier.push(&self.tree[root]);
                debug!(
                    event = "depth_limit_raised",
                    depth_limit,
                    nodes_expanded = self.stats.nodes_expanded,
                );
            }
        };
        self.stats.depth_limit = Some(depth_limit);
        self.finish(NAME, frontier.high_water(), outcome)
    }

    /// Expansions performed by the most recent run.
    #[must_use]
    pub fn nodes_expanded(&self) -> u64 {
        self.stats.nodes_expanded
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    #[must_use]
    pub fn goal(&self) -> &Grid {
        &self.goal
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    #[must_use]
    pub fn root(&self) -> &SearchNode {
        &self.tree[self.tree.root()]
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SearchNode> {
        self.tree.get(id)
    }

    /// Nodes from the root to `id`, inclusive.
    #[must_use]
    pub fn path(&self, id: NodeId) -> Vec<&SearchNode> {
        self.tree
            .path_from_root(id)
            .into_iter()
            .map(|n| &self.tree[n])
            .collect()
    }

    /// Move labels from the root to `id`, starting with `START`.
    #[must_use]
    pub fn moves(&self, id: NodeId) -> Vec<MoveLabel> {
        self.tree.moves_from_root(id)
    }

    // -----------------------------------------------------------------------
    // Shared loop pieces
    // -----------------------------------------------------------------------

    fn drive<F, P>(&mut self, frontier: &mut F, mut prepare: P) -> SearchOutcome
    where
        F: Frontier,
        P: FnMut(&mut Self, &mut Vec<NodeId>),
    {
        while let Some(id) = frontier.pop() {
            if self.is_goal(id) {
                return self.solved(id, None);
            }
            if self.budget_spent() {
                return SearchOutcome::BudgetExhausted;
            }
            let mut children = self.expand_admitted(id, None);
            prepare(self, &mut children);
            for &child in &children {
                frontier.push(&self.tree[child]);
            }
            self.stats.nodes_expanded += 1;
        }
        SearchOutcome::Exhausted
    }

    fn begin_run(&mut self, strategy: &str) {
        self.tree.truncate_to_root();
        self.stats = SearchStats::default();
        self.visited = VisitedTable::new();
        self.rng = seeded_rng(&self.policy);
        self.reset_visited();
        info!(
            event = "search_start",
            strategy,
            side = self.goal.side(),
            dedup = ?self.policy.dedup,
            max_expansions = ?self.policy.max_expansions,
        );
    }

    fn reset_visited(&mut self) {
        self.visited.clear();
        if self.policy.dedup == DedupPolicy::ShallowestDepth {
            let root = self.tree.root();
            self.visited.admit(&self.tree[root].state, 0);
        }
    }

    fn budget_spent(&self) -> bool {
        self.policy
            .max_expansions
            .is_some_and(|max| self.stats.nodes_expanded >= max)
    }

    fn is_goal(&self, id: NodeId) -> bool {
        self.tree[id].state.is_goal(&self.goal)
    }

    fn expand_admitted(&mut self, id: NodeId, depth_limit: Option<u32>) -> Vec<NodeId> {
        let dedup = self.policy.dedup == DedupPolicy::ShallowestDepth;
        let visited = &mut self.visited;
        let children = self.tree.expand_where(id, |state, depth| {
            if depth_limit.is_some_and(|limit| depth > limit) {
                return false;
            }
            !dedup || visited.admit(state, depth)
        });
        self.stats.nodes_generated += children.len() as u64;
        children
    }

    fn solved(&self, id: NodeId, depth_limit: Option<u32>) -> SearchOutcome {
        SearchOutcome::Solved(Solution {
            node: id,
            depth: self.tree[id].depth,
            nodes_expanded: self.stats.nodes_expanded,
            depth_limit,
        })
    }

    fn finish(&mut self, strategy: &str, high_water: u64, outcome: SearchOutcome) -> SearchOutcome {
        self.stats.frontier_high_water = high_water;
        self.stats.duplicates_suppressed = self.visited.suppressed();
        info!(
            event = "search_end",
            strategy,
            outcome = outcome.termination(),
            depth = outcome.solution().map(|s| s.depth),
            nodes_expanded = self.stats.nodes_expanded,
            nodes_generated = self.stats.nodes_generated,
        );
        outcome
    }
}

fn seeded_rng(policy: &SearchPolicy) -> StdRng {
    match policy.shuffle_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
