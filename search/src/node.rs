//! Core search node types.

use std::fmt;

use slidetile_kernel::direction::Direction;
use slidetile_kernel::grid::Grid;

/// Handle of a node inside a [`crate::tree::SearchTree`].
///
/// Handles are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The action that produced a node from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveLabel {
    Start,
    Up,
    Down,
    Left,
    Right,
}

impl MoveLabel {
    /// The blank move behind this label; `None` for [`MoveLabel::Start`].
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Start => None,
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

impl From<Direction> for MoveLabel {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }
}

impl fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A puzzle state with its tree bookkeeping.
///
/// Ordering for best-first extraction uses `(cost, depth, creation_order)`:
/// lower cost first; ties broken by *deeper* depth, then older creation order.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Arena handle of this node.
    pub id: NodeId,
    /// Parent handle (`None` for root).
    pub parent: Option<NodeId>,
    /// Full immutable state at this node.
    pub state: Grid,
    /// Tree depth (root = 0). Equals the path length from the root.
    pub depth: u32,
    /// Priority written by a heuristic evaluator; 0 until evaluated.
    pub cost: i64,
    /// The move that produced this node.
    pub label: MoveLabel,
    /// Tree-wide counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl SearchNode {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub fn frontier_key(&self) -> FrontierKey {
        FrontierKey::from(self)
    }
}

/// The best-first ordering key: `(cost, depth, creation_order)`.
///
/// Lower `cost` first, then *greater* depth, then older `creation_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub cost: i64,
    pub depth: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .cmp(&other.cost)
            .then(other.depth.cmp(&self.depth))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            cost: node.cost,
            depth: node.depth,
            creation_order: node.creation_order,
        }
    }
}
