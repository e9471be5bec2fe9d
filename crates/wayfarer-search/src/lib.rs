//! Wayfarer Search - path search engines.
//!
//! Three engines over the [`wayfarer_core`] contract, distinguished only by
//! their frontier ordering policy:
//! - [`BreadthFirstTree`] - FIFO frontier, no duplicate detection
//! - [`DepthFirstGraph`] - LIFO frontier with an explored set
//! - [`AStarTree`] - priority frontier ordered by estimated total cost
//!
//! Every engine owns its frontier and node arena exclusively, runs
//! synchronously on the calling thread, and returns a [`SearchOutcome`]
//! from which the goal state, its realized cost and the full predecessor
//! path can be read.

mod astar;
mod breadth_first;
mod depth_first;
mod node;
mod result;

pub use astar::{AStarStep, AStarTree};
pub use breadth_first::BreadthFirstTree;
pub use depth_first::DepthFirstGraph;
pub use result::{GoalPath, SearchOutcome, SearchStats};
