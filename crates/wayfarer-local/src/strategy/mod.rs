//! Successor-selection strategies for hill climbing.
//!
//! The climbing loop in [`crate::climb`] is strategy-agnostic: each step it
//! scores every successor of the current state and hands the pool to a
//! [`SuccessorSelector`], which decides which candidate (if any) to move to.

use std::fmt::Debug;

use wayfarer_core::State;

mod simulated_annealing;
mod steepest_ascent;
mod stochastic;

pub use simulated_annealing::SimulatedAnnealing;
pub use steepest_ascent::SteepestAscent;
pub use stochastic::Stochastic;

/// A successor state paired with its memoized quality score.
#[derive(Debug, Clone)]
pub struct Candidate<S> {
    /// The successor state.
    pub state: S,
    /// The state's quality score, higher is better.
    pub score: f64,
}

/// Chooses the next state from a pool of scored successors.
///
/// Selectors are stateful: they own their randomness and, for simulated
/// annealing, the cooling schedule. A fresh selector should be built for
/// each climbing run.
pub trait SuccessorSelector<S: State>: Debug {
    /// Picks the candidate to move to, or `None` to keep the current state.
    ///
    /// The pool is never empty; the climbing loop terminates on dead-end
    /// states before consulting the selector.
    fn pick(&mut self, current_score: f64, pool: Vec<Candidate<S>>) -> Option<Candidate<S>>;

    /// Whether picks scoring strictly below the current state may be
    /// accepted as moves.
    fn allows_downhill_moves(&self) -> bool {
        false
    }
}
