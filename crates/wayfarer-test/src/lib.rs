//! Shared test fixtures for Wayfarer crates.
//!
//! The engine crates specify problem domains only through the core contract;
//! the concrete domains used to exercise them live here:
//!
//! - [`queens`] - the N-Queens board with the clash-count heuristic
//! - [`sliding`] - the sliding-tile puzzle with the Manhattan distance
//!   heuristic
//! - [`route`] - a weighted-graph route world with the global-distance
//!   heuristic
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! wayfarer-test = { workspace = true }
//! ```

pub mod queens;
pub mod route;
pub mod sliding;

// Re-export commonly used types at crate root for convenience
pub use queens::{ClashCountHeuristic, QueensState};
pub use route::{GlobalDistanceHeuristic, RouteState, RouteWorld};
pub use sliding::{ManhattanDistanceHeuristic, SlideMove, SlidingState};

/// Installs a `tracing` subscriber honouring `RUST_LOG`, if none is set yet.
///
/// Call at the top of a test to see engine logs; repeated calls are
/// harmless.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
