//! Frontier containers and the optional duplicate-state table.
//!
//! - [`PriorityFrontier`]: best-first, ordered by [`FrontierKey`]
//! - [`FifoFrontier`]: breadth-first queue
//! - [`LifoFrontier`]: depth-first stack
//!
//! Frontiers store node handles only; the nodes themselves live in the
//! [`crate::tree::SearchTree`] arena.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use slidetile_kernel::grid::Grid;

use crate::node::{FrontierKey, NodeId, SearchNode};

/// Common surface of the three frontier disciplines.
pub trait Frontier {
    /// Add a node. The frontier reads whatever ordering data it needs now.
    fn push(&mut self, node: &SearchNode);

    /// Remove the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    fn high_water(&self) -> u64;
}

fn raise(high_water: &mut u64, len: usize) {
    let size = len as u64;
    if size > *high_water {
        *high_water = size;
    }
}

/// A frontier entry wrapping a handle with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest cost first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    id: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier keyed on `(cost, deeper-first, creation order)`.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierEntry>,
    high_water: u64,
}

impl PriorityFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: &SearchNode) {
        self.heap.push(FrontierEntry {
            key: Reverse(node.frontier_key()),
            id: node.id,
        });
        raise(&mut self.high_water, self.heap.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// First-in first-out frontier.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
    high_water: u64,
}

impl FifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: &SearchNode) {
        self.queue.push_back(node.id);
        raise(&mut self.high_water, self.queue.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// Last-in first-out frontier.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
    high_water: u64,
}

impl LifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node: &SearchNode) {
        self.stack.push(node.id);
        raise(&mut self.high_water, self.stack.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// Shallowest depth at which each state has been generated.
///
/// Never iterated, so the hash order cannot leak into search results.
#[derive(Debug, Default)]
pub struct VisitedTable {
    shallowest: HashMap<Grid, u32>,
    suppressed: u64,
}

impl VisitedTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `state` at `depth`.
    ///
    /// Returns `true` if the state was never seen or only seen deeper.
    /// Returns `false` (and counts a suppression) otherwise.
    pub fn admit(&mut self, state: &Grid, depth: u32) -> bool {
        match self.shallowest.get_mut(state) {
            Some(seen) if *seen <= depth => {
                self.suppressed += 1;
                false
            }
            Some(seen) => {
                *seen = depth;
                true
            }
            None => {
                self.shallowest.insert(state.clone(), depth);
                true
            }
        }
    }

    /// Forget every state (suppression count is kept).
    pub fn clear(&mut self) {
        self.shallowest.clear();
    }

    /// Number of distinct states recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shallowest.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shallowest.is_empty()
    }

    /// Children rejected since construction.
    #[must_use]
    pub fn suppressed(&self) -> u64 {
        self.suppressed
    }
}
