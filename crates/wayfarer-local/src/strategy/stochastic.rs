//! Stochastic hill-climbing successor selection.

use rand::rngs::StdRng;
use rand::SeedableRng;

use wayfarer_core::num::{approx_eq, select_weighted};
use wayfarer_core::State;

use super::{Candidate, SuccessorSelector};

/// Picks a non-downhill successor at random, weighted by quality.
///
/// Candidates scoring below the current state (beyond the float-comparison
/// margin) are discarded. The remaining candidates are drawn with
/// probability proportional to their score's lead over the worst surviving
/// candidate; when all survivors score equally, the draw is arbitrary.
#[derive(Debug)]
pub struct Stochastic {
    rng: StdRng,
}

impl Stochastic {
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

impl Default for Stochastic {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> SuccessorSelector<S> for Stochastic {
    fn pick(&mut self, current_score: f64, pool: Vec<Candidate<S>>) -> Option<Candidate<S>> {
        let mut survivors: Vec<Candidate<S>> = pool
            .into_iter()
            .filter(|candidate| {
                candidate.score > current_score || approx_eq(candidate.score, current_score)
            })
            .collect();
        if survivors.is_empty() {
            return None;
        }

        let floor = survivors
            .iter()
            .map(|candidate| candidate.score)
            .fold(f64::INFINITY, f64::min);
        let weights: Vec<f64> = survivors
            .iter()
            .map(|candidate| candidate.score - floor)
            .collect();

        // The survivor list is non-empty, so the draw cannot fail.
        let index = select_weighted(&mut self.rng, &weights).ok()?;
        Some(survivors.swap_remove(index))
    }
}
