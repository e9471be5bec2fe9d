//! Wayfarer - a state-space search and local optimization framework.
//!
//! Problem domains implement the [`State`] / [`Action`] contract and,
//! where an engine needs one, a [`Heuristic`] that scores states. On top of
//! that contract the framework offers two families of solvers:
//!
//! - **Path search** ([`search`]): [`BreadthFirstTree`], [`DepthFirstGraph`]
//!   and [`AStarTree`] look for a goal state and return the route to it as
//!   a [`GoalPath`].
//! - **Local optimization** ([`local`]): [`HillClimbing`] and
//!   [`RandomRestart`] look only for a high-quality state, guided by a
//!   pluggable successor-selection strategy.
//!
//! Strategy, plateau policy and restart behaviour can be loaded from TOML
//! through [`config::LocalSearchConfig`].
//!
//! # Example
//!
//! Solve a scrambled sliding puzzle with A*:
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use wayfarer::search::AStarTree;
//! use wayfarer::State;
//! use wayfarer_test::sliding::{ManhattanDistanceHeuristic, SlidingState};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let scrambled = SlidingState::solved(3, 3).unwrap().scramble(&mut rng, 6);
//!
//! let outcome = AStarTree::new(scrambled, ManhattanDistanceHeuristic).run();
//! let goal = outcome.into_goal().unwrap();
//! assert!(goal.state().is_goal());
//! assert!(goal.cost() <= 6.0);
//! ```

pub use wayfarer_config as config;
pub use wayfarer_core as core;
pub use wayfarer_local as local;
pub use wayfarer_search as search;

pub use wayfarer_core::{Action, Heuristic, Point, Result, State, WayfarerError};
pub use wayfarer_local::{HillClimbing, RandomRestart};
pub use wayfarer_search::{AStarTree, BreadthFirstTree, DepthFirstGraph, GoalPath, SearchOutcome};
