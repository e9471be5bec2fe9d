//! Wayfarer Core - shared contract for state-space search and local
//! optimization.
//!
//! This crate provides the fundamental abstractions the search engines are
//! built on:
//! - The [`State`] / [`Action`] contract implemented by problem domains
//! - The [`Heuristic`] trait with memoized quality scoring
//! - Numeric utilities: tolerant float comparison, cumulative-weight search
//!   and weighted random selection
//! - N-dimensional [`Point`]s with Manhattan and Euclidean metrics

pub mod error;
pub mod heuristic;
pub mod num;
pub mod point;
pub mod state;

pub use error::{Result, WayfarerError};
pub use heuristic::Heuristic;
pub use point::Point;
pub use state::{Action, State};
