//! Steepest-ascent successor selection.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use wayfarer_core::num::approx_eq;
use wayfarer_core::State;

use super::{Candidate, SuccessorSelector};

/// Picks the best-scoring successor, breaking ties randomly.
///
/// The pool is shuffled before the maximum is taken, so that among several
/// equally-scored best candidates each is picked with equal probability.
/// A candidate scoring strictly below the current state is never picked.
#[derive(Debug)]
pub struct SteepestAscent {
    rng: StdRng,
}

impl SteepestAscent {
    /// Creates a selector seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a selector with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SteepestAscent {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> SuccessorSelector<S> for SteepestAscent {
    fn pick(&mut self, current_score: f64, mut pool: Vec<Candidate<S>>) -> Option<Candidate<S>> {
        pool.shuffle(&mut self.rng);
        let best = pool
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))?;

        if best.score > current_score || approx_eq(best.score, current_score) {
            Some(best)
        } else {
            None
        }
    }
}
