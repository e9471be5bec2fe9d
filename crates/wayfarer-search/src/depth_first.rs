//! Depth-first graph search.

use std::collections::HashSet;
use std::hash::Hash;

use wayfarer_core::State;

use crate::node::SearchTree;
use crate::result::{SearchOutcome, SearchStats};

/// A graph-based form of the depth-first search algorithm.
///
/// The frontier is a LIFO stack and an explored set, keyed by state value,
/// guarantees that every distinct state is expanded at most once. The search
/// therefore terminates on any domain with finitely many distinct reachable
/// states, including cyclic ones. It makes no promise about the cost of the
/// returned path.
#[derive(Debug)]
pub struct DepthFirstGraph<S: State + Eq + Hash> {
    tree: SearchTree<S>,
    frontier: Vec<usize>,
    explored: HashSet<S>,
    stats: SearchStats,
}

impl<S: State + Eq + Hash> DepthFirstGraph<S> {
    /// Creates a search seeded with the given start state.
    pub fn new(start_state: S) -> Self {
        let mut tree = SearchTree::new();
        let root = tree.push(start_state, None, 0.0);
        Self {
            tree,
            frontier: vec![root],
            explored: HashSet::new(),
            stats: SearchStats::default(),
        }
    }

    /// Runs the algorithm to completion.
    ///
    /// Returns an outcome without a goal path if every reachable state has
    /// been expanded without finding a goal.
    pub fn run(mut self) -> SearchOutcome<S> {
        tracing::debug!("starting depth-first graph search");
        while let Some(index) = self.frontier.pop() {
            if !self.explored.insert(self.tree.node(index).state.clone()) {
                // Already expanded; discard this occurrence.
                continue;
            }

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
            for action in self.tree.node(index).state.available_actions() {
                let cost = parent_cost + action.cost();
                let child = self
                    .tree
                    .push(action.into_resulting_state(), Some(index), cost);
                self.frontier.push(child);
                self.stats.generated += 1;
            }
        }

        tracing::debug!(expanded = self.stats.expanded, "frontier exhausted");
        SearchOutcome::exhausted(self.stats)
    }
}
