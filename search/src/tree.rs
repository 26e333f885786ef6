//! Node arena with parent back-links.
//!
//! Nodes live in a `Vec` and refer to their parent by [`NodeId`]. Parents do
//! not record their children; the tree is walked leaf-to-root through parent
//! handles, and root-to-leaf only through an explicit path list.

use std::ops::Index;

use slidetile_kernel::direction::Direction;
use slidetile_kernel::grid::Grid;

use crate::node::{MoveLabel, NodeId, SearchNode};

/// Arena of search nodes rooted at a single start state.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    next_creation_order: u64,
}

impl SearchTree {
    /// Create a tree holding only the root, labelled [`MoveLabel::Start`].
    #[must_use]
    pub fn with_root(state: Grid) -> Self {
        Self::with_labelled_root(state, MoveLabel::Start)
    }

    /// Create a tree whose root carries an explicit move label.
    #[must_use]
    pub fn with_labelled_root(state: Grid, label: MoveLabel) -> Self {
        let root = SearchNode {
            id: NodeId(0),
            parent: None,
            state,
            depth: 0,
            cost: 0,
            label,
            creation_order: 0,
        };
        Self {
            nodes: vec![root],
            next_creation_order: 1,
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SearchNode> {
        self.nodes.get_mut(id.0)
    }

    /// Number of nodes currently held (root included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Generate every child of `id`, in [`Direction::ALL`] order.
    ///
    /// Each child's depth is the parent's plus one and its cost is 0.
    pub fn expand(&mut self, id: NodeId) -> Vec<NodeId> {
        self.expand_where(id, |_, _| true)
    }

    /// Like [`SearchTree::expand`], but only children for which
    /// `admit(state, depth)` returns `true` are stored.
    pub fn expand_where<F>(&mut self, id: NodeId, mut admit: F) -> Vec<NodeId>
    where
        F: FnMut(&Grid, u32) -> bool,
    {
        let Some(parent) = self.nodes.get(id.0) else {
            return Vec::new();
        };
        let depth = parent.depth + 1;
        let successors: Vec<(Direction, Grid)> = Direction::ALL
            .into_iter()
            .filter_map(|dir| parent.state.with_move(dir).map(|grid| (dir, grid)))
            .collect();

        let mut children = Vec::with_capacity(successors.len());
        for (direction, state) in successors {
            if !admit(&state, depth) {
                continue;
            }
            let child = NodeId(self.nodes.len());
            self.nodes.push(SearchNode {
                id: child,
                parent: Some(id),
                state,
                depth,
                cost: 0,
                label: MoveLabel::from(direction),
                creation_order: self.next_creation_order,
            });
            self.next_creation_order += 1;
            children.push(child);
        }
        children
    }

    /// Handles from the root to `id`, inclusive. O(depth).
    #[must_use]
    pub fn path_from_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current.and_then(|c| self.nodes.get(c.0)) {
            path.push(node.id);
            current = node.parent;
        }
        path.reverse();
        path
    }

    /// Move labels from the root to `id`, starting with the root's label.
    #[must_use]
    pub fn moves_from_root(&self, id: NodeId) -> Vec<MoveLabel> {
        self.path_from_root(id)
            .into_iter()
            .map(|n| self[n].label)
            .collect()
    }

    /// Blank moves that lead from the root state to the state at `id`.
    #[must_use]
    pub fn directions_from_root(&self, id: NodeId) -> Vec<Direction> {
        self.moves_from_root(id)
            .into_iter()
            .filter_map(MoveLabel::direction)
            .collect()
    }

    /// Drop every node except the root. Outstanding handles become invalid.
    pub fn truncate_to_root(&mut self) {
        self.nodes.truncate(1);
    }
}

impl Index<NodeId> for SearchTree {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}
