//! A* best-first path search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use wayfarer_core::{Heuristic, State};

use crate::node::SearchTree;
use crate::result::{SearchOutcome, SearchStats};

/// The result of a single A* expansion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AStarStep {
    /// A non-goal state was expanded; more steps are needed.
    Expanded,
    /// The removed state was a goal; the search is finished.
    FoundGoal,
    /// The frontier is empty; no goal is reachable.
    Exhausted,
}

/// The A* path-finding algorithm, as a tree search.
///
/// The frontier is ordered by estimated total cost: the realized cost of
/// reaching a state plus the gap between the heuristic's optimal score and
/// the state's quality score. Every generated state is scored exactly once,
/// through the memoizing heuristic wrapper.
///
/// There is no explored set, so states may be re-expanded in cyclic domains.
/// The returned cost is optimal only if the heuristic is admissible (never
/// overestimates the remaining cost) and consistent; both are caller
/// obligations that the engine does not verify. Tie-breaking among equal
/// estimates is unspecified.
#[derive(Debug)]
pub struct AStarTree<S: State, H: Heuristic<S>> {
    tree: SearchTree<S>,
    frontier: BinaryHeap<PriorityEntry>,
    heuristic: H,
    stats: SearchStats,
    found: Option<usize>,
}

impl<S: State, H: Heuristic<S>> AStarTree<S, H> {
    /// Creates a search seeded with the given start state, scored once.
    pub fn new(mut start_state: S, heuristic: H) -> Self {
        let score = heuristic.quality_score(&mut start_state);
        let estimate = heuristic.optimal_score() - score;

        let mut tree = SearchTree::new();
        let root = tree.push(start_state, None, 0.0);
        let mut frontier = BinaryHeap::new();
        frontier.push(PriorityEntry {
            estimated_total_cost: estimate,
            index: root,
        });

        Self {
            tree,
            frontier,
            heuristic,
            stats: SearchStats::default(),
            found: None,
        }
    }

    /// Removes the minimum-estimate state from the frontier and expands it,
    /// unless it is a goal.
    pub fn step(&mut self) -> AStarStep {
        let Some(entry) = self.frontier.pop() else {
            return AStarStep::Exhausted;
        };

        if self.tree.node(entry.index).state.is_goal() {
            self.found = Some(entry.index);
            return AStarStep::FoundGoal;
        }

        self.stats.expanded += 1;
        let parent_cost = self.tree.node(entry.index).cost;
        for action in self.tree.node(entry.index).state.available_actions() {
            let cost = parent_cost + action.cost();
            let mut successor = action.into_resulting_state();
            let score = self.heuristic.quality_score(&mut successor);
            let estimate = cost + (self.heuristic.optimal_score() - score);

            let child = self.tree.push(successor, Some(entry.index), cost);
            self.frontier.push(PriorityEntry {
                estimated_total_cost: estimate,
                index: child,
            });
            self.stats.generated += 1;
        }

        AStarStep::Expanded
    }

    /// Runs the algorithm to completion.
    pub fn run(mut self) -> SearchOutcome<S> {
        tracing::debug!("starting A* tree search");
        loop {
            match self.step() {
                AStarStep::Expanded => continue,
                AStarStep::FoundGoal | AStarStep::Exhausted => return self.into_outcome(),
            }
        }
    }

    /// Consumes the engine, yielding the outcome of the steps taken so far.
    pub fn into_outcome(self) -> SearchOutcome<S> {
        match self.found {
            Some(goal) => {
                tracing::debug!(
                    expanded = self.stats.expanded,
                    cost = self.tree.node(goal).cost,
                    "goal state found"
                );
                SearchOutcome::found(self.tree.into_goal_path(goal), self.stats)
            }
            None => SearchOutcome::exhausted(self.stats),
        }
    }

    /// The number of states currently awaiting expansion.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}

/// Frontier entry ordering: `BinaryHeap` is a max-heap, so the comparison is
/// reversed to pop the cheapest estimate first.
#[derive(Debug)]
struct PriorityEntry {
    estimated_total_cost: f64,
    index: usize,
}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimated_total_cost
            .total_cmp(&self.estimated_total_cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityEntry {}
