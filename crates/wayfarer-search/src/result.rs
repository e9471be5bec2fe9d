//! Search results: the goal path and per-run statistics.

use wayfarer_core::State;

use crate::node::Node;

/// Counters describing a finished search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States removed from the frontier and expanded.
    pub expanded: u64,
    /// States generated by applying actions (and added to the frontier).
    pub generated: u64,
}

/// The result of running a search engine to completion.
#[derive(Debug)]
pub struct SearchOutcome<S> {
    goal: Option<GoalPath<S>>,
    stats: SearchStats,
}

impl<S: State> SearchOutcome<S> {
    pub(crate) fn found(goal: GoalPath<S>, stats: SearchStats) -> Self {
        Self {
            goal: Some(goal),
            stats,
        }
    }

    pub(crate) fn exhausted(stats: SearchStats) -> Self {
        Self { goal: None, stats }
    }

    /// The goal path, if a goal state was found before the frontier
    /// emptied.
    pub fn goal(&self) -> Option<&GoalPath<S>> {
        self.goal.as_ref()
    }

    /// Consumes the outcome, yielding the goal path.
    pub fn into_goal(self) -> Option<GoalPath<S>> {
        self.goal
    }

    /// Statistics for the finished run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// A goal state together with the predecessor chain that produced it.
#[derive(Debug)]
pub struct GoalPath<S> {
    nodes: Vec<Node<S>>,
    goal: usize,
}

impl<S: State> GoalPath<S> {
    pub(crate) fn new(nodes: Vec<Node<S>>, goal: usize) -> Self {
        Self { nodes, goal }
    }

    /// The goal state itself.
    pub fn state(&self) -> &S {
        &self.nodes[self.goal].state
    }

    /// The realized cost of reaching the goal from the start state.
    pub fn cost(&self) -> f64 {
        self.nodes[self.goal].cost
    }

    /// The number of actions on the path from start to goal.
    pub fn depth(&self) -> usize {
        self.indices().len() - 1
    }

    /// The full path from the start state to the goal state.
    pub fn path(&self) -> Vec<&S> {
        self.indices()
            .into_iter()
            .map(|index| &self.nodes[index].state)
            .collect()
    }

    /// Consumes the path, yielding the goal state.
    pub fn into_state(mut self) -> S {
        self.nodes.swap_remove(self.goal).state
    }

    fn indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        let mut current = Some(self.goal);
        while let Some(index) = current {
            indices.push(index);
            current = self.nodes[index].parent;
        }
        indices.reverse();
        indices
    }
}
