//! Wayfarer Local - hill climbing and random-restart local optimization.
//!
//! Where the path-search engines look for a goal state and the route to it,
//! this crate only looks for a good state: [`HillClimbing`] iteratively
//! moves to a successor chosen by a pluggable [`SuccessorSelector`], and
//! [`RandomRestart`] repeats the climb from fresh random starts until a run
//! lands within a quality margin of the heuristic's optimum.
//!
//! Three selectors are provided: [`SteepestAscent`], [`Stochastic`] and
//! [`SimulatedAnnealing`]. [`climb_from_config`] and [`RandomRestart::new`]
//! wire all of this up from a [`wayfarer_config::LocalSearchConfig`].
//!
//! # Example
//!
//! ```
//! use wayfarer_local::{HillClimbing, SteepestAscent};
//! use wayfarer_test::queens::{ClashCountHeuristic, QueensState};
//!
//! let start = QueensState::new(vec![0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
//! let improved = HillClimbing::new(start, ClashCountHeuristic, SteepestAscent::new())
//!     .with_max_plateau_moves(100)
//!     .run();
//! assert!(improved.count_clashes() <= 28);
//! ```

mod climb;
mod factory;
mod restart;
pub mod strategy;

pub use climb::{HillClimbing, StepOutcome};
pub use factory::{climb_from_config, selector_from_config, ConfiguredSelector};
pub use restart::RandomRestart;
pub use strategy::{Candidate, SimulatedAnnealing, SteepestAscent, Stochastic, SuccessorSelector};
