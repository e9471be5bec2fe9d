//! The node arena backing predecessor chains.
//!
//! Predecessor links are indices into an owned vector rather than
//! back-pointers between states, which keeps ownership singly-directed and
//! makes cycles impossible.

use wayfarer_core::State;

use crate::result::GoalPath;

/// One generated state with its parent link and accumulated path cost.
#[derive(Debug, Clone)]
pub(crate) struct Node<S> {
    pub state: S,
    pub parent: Option<usize>,
    pub cost: f64,
}

/// An arena of every state generated during a search.
#[derive(Debug)]
pub(crate) struct SearchTree<S> {
    nodes: Vec<Node<S>>,
}

impl<S: State> SearchTree<S> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a node and returns its index.
    pub fn push(&mut self, state: S, parent: Option<usize>, cost: f64) -> usize {
        self.nodes.push(Node {
            state,
            parent,
            cost,
        });
        self.nodes.len() - 1
    }

    pub fn node(&self, index: usize) -> &Node<S> {
        &self.nodes[index]
    }

    /// Consumes the arena, yielding the path that ends at `goal`.
    pub fn into_goal_path(self, goal: usize) -> GoalPath<S> {
        GoalPath::new(self.nodes, goal)
    }
}
