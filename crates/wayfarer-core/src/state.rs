//! The state/action contract shared by every search engine.

use std::fmt::Debug;

use crate::error::{Result, WayfarerError};

/// A single point in a domain's state space.
///
/// The trait is self-referential: a state's actions produce values of the
/// same concrete state type, so states from different problem domains cannot
/// be mixed at compile time.
///
/// Every state carries a lazily-computed quality score (higher is better).
/// The score is written exactly once, by [`Heuristic::quality_score`], and
/// must never change afterwards.
///
/// [`Heuristic::quality_score`]: crate::heuristic::Heuristic::quality_score
pub trait State: Clone + Debug + Sized {
    /// Returns true if this state is a goal state for the problem.
    fn is_goal(&self) -> bool;

    /// Returns every action available to an agent in this state.
    ///
    /// The order of the returned actions is visible to callers but engines
    /// must not rely on it for correctness, only for tie-breaking.
    fn available_actions(&self) -> Vec<Action<Self>>;

    /// Returns the cached quality score, if one has been assigned.
    fn quality_score(&self) -> Option<f64>;

    /// Stores the quality score with the state.
    ///
    /// Called once per state by the memoizing heuristic wrapper; domain code
    /// should not call this directly.
    fn set_quality_score(&mut self, score: f64);
}

/// One legal transition out of a state: the state it leads to, and the cost
/// of taking it.
#[derive(Debug, Clone)]
pub struct Action<S: State> {
    resulting_state: S,
    cost: f64,
}

impl<S: State> Action<S> {
    /// Creates a new action.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::InvalidArgument`] if the cost is negative
    /// (or NaN).
    pub fn new(resulting_state: S, cost: f64) -> Result<Self> {
        if !(cost >= 0.0) {
            return Err(WayfarerError::InvalidArgument(format!(
                "action cost must be non-negative, got {cost}"
            )));
        }
        Ok(Self {
            resulting_state,
            cost,
        })
    }

    /// The state that this action results in.
    pub fn resulting_state(&self) -> &S {
        &self.resulting_state
    }

    /// Consumes the action, yielding its resulting state.
    pub fn into_resulting_state(self) -> S {
        self.resulting_state
    }

    /// The cost of performing this action.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}
