//! Breadth-first tree search.

use std::collections::VecDeque;

use wayfarer_core::State;

use crate::node::SearchTree;
use crate::result::{SearchOutcome, SearchStats};

/// A simple form of the tree-based breadth-first search algorithm.
///
/// The frontier is FIFO-ordered and there is no duplicate detection: the
/// same state may be enqueued, and expanded, any number of times. The first
/// goal returned is reachable in a minimum number of actions. Two hazards
/// are left to the caller:
///
/// - in a cyclic domain states are re-expanded freely, inflating the
///   frontier;
/// - on an infinite state space without a reachable goal, [`run`]
///   never returns.
///
/// [`run`]: BreadthFirstTree::run
#[derive(Debug)]
pub struct BreadthFirstTree<S: State> {
    tree: SearchTree<S>,
    frontier: VecDeque<usize>,
    stats: SearchStats,
}

impl<S: State> BreadthFirstTree<S> {
    /// Creates a search seeded with the given start state.
    pub fn new(start_state: S) -> Self {
        let mut tree = SearchTree::new();
        let root = tree.push(start_state, None, 0.0);
        let mut frontier = VecDeque::new();
        frontier.push_back(root);
        Self {
            tree,
            frontier,
            stats: SearchStats::default(),
        }
    }

    /// Runs the algorithm to completion.
    ///
    /// Returns an outcome without a goal path if the frontier empties
    /// first.
    pub fn run(mut self) -> SearchOutcome<S> {
        tracing::debug!("starting breadth-first tree search");
        while let Some(index) = self.frontier.pop_front() {
            if self.tree.node(index).state.is_goal() {
                tracing::debug!(
                    expanded = self.stats.expanded,
                    cost = self.tree.node(index).cost,
                    "goal state found"
                );
                return SearchOutcome::found(self.tree.into_goal_path(index), self.stats);
            }

            self.stats.expanded += 1;
            let parent_cost = self.tree.node(index).cost;
            // Enqueue the resulting state of every available action.
            for action in self.tree.node(index).state.available_actions() {
                let cost = parent_cost + action.cost();
                let child = self
                    .tree
                    .push(action.into_resulting_state(), Some(index), cost);
                self.frontier.push_back(child);
                self.stats.generated += 1;
            }
        }

        tracing::debug!(expanded = self.stats.expanded, "frontier exhausted");
        SearchOutcome::exhausted(self.stats)
    }
}
