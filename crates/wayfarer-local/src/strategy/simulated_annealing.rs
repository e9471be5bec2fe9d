//! Simulated-annealing successor selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wayfarer_core::State;

use super::{Candidate, SuccessorSelector};

/// Draws candidates at random and accepts downhill moves while hot.
///
/// The temperature starts at `1.0` and drops by the cooling rate before
/// every candidate evaluation, across the whole run. Candidates are drawn
/// from the pool without replacement: a strictly better candidate is always
/// accepted, a worse or equal one with probability equal to the current
/// temperature. Once the temperature reaches zero only uphill draws can
/// succeed, so the selector degenerates into first-choice hill climbing.
#[derive(Debug)]
pub struct SimulatedAnnealing {
    rng: StdRng,
    temperature: f64,
    cooling_rate: f64,
}

impl SimulatedAnnealing {
    /// Creates a selector seeded from OS entropy.
    ///
    /// The cooling rate is the amount subtracted from the temperature per
    /// candidate evaluation and should lie in `(0, 1]`.
    pub fn new(cooling_rate: f64) -> Self {
        Self::from_rng(cooling_rate, StdRng::from_os_rng())
    }

    /// Creates a selector with a fixed seed, for reproducible runs.
    pub fn with_seed(cooling_rate: f64, seed: u64) -> Self {
        Self::from_rng(cooling_rate, StdRng::seed_from_u64(seed))
    }

    fn from_rng(cooling_rate: f64, rng: StdRng) -> Self {
        debug_assert!(cooling_rate > 0.0 && cooling_rate <= 1.0);
        Self {
            rng,
            temperature: 1.0,
            cooling_rate,
        }
    }

    /// The current temperature. Negative once the schedule has run out.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl<S: State> SuccessorSelector<S> for SimulatedAnnealing {
    fn pick(&mut self, current_score: f64, mut pool: Vec<Candidate<S>>) -> Option<Candidate<S>> {
        while !pool.is_empty() {
            self.temperature -= self.cooling_rate;
            let candidate = pool.swap_remove(self.rng.random_range(0..pool.len()));

            if candidate.score > current_score {
                return Some(candidate);
            }
            if self.rng.random::<f64>() < self.temperature {
                return Some(candidate);
            }
        }
        None
    }

    fn allows_downhill_moves(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use wayfarer_test::queens::QueensState;

    use super::*;

    fn pool_of(scores: &[f64]) -> Vec<Candidate<QueensState>> {
        scores
            .iter()
            .map(|&score| Candidate {
                state: QueensState::new(vec![0; 4]).unwrap(),
                score,
            })
            .collect()
    }

    #[test]
    fn allows_downhill_moves() {
        let selector = SimulatedAnnealing::with_seed(0.1, 1);
        assert!(SuccessorSelector::<QueensState>::allows_downhill_moves(
            &selector
        ));
    }

    #[test]
    fn always_accepts_a_drawn_uphill_candidate() {
        let mut selector = SimulatedAnnealing::with_seed(1.0, 5);
        // Cooling rate 1.0 kills the temperature on the first draw, so only
        // the uphill branch can accept.
        for _ in 0..50 {
            let picked = selector.pick(-3.0, pool_of(&[-1.0])).unwrap();
            assert_eq!(picked.score, -1.0);
        }
    }

    #[test]
    fn rejects_downhill_candidates_once_cold() {
        let mut selector = SimulatedAnnealing::with_seed(1.0, 5);
        for _ in 0..50 {
            assert!(selector.pick(-1.0, pool_of(&[-3.0, -2.0])).is_none());
        }
    }

    #[test]
    fn accepts_downhill_candidates_while_hot() {
        // A tiny cooling rate keeps the temperature near 1.0 for the first
        // draws, so an all-downhill pool is still accepted.
        let mut selector = SimulatedAnnealing::with_seed(1e-9, 7);
        let mut accepted = 0;
        for _ in 0..100 {
            if selector.pick(-1.0, pool_of(&[-3.0])).is_some() {
                accepted += 1;
            }
        }
        assert!(accepted > 90, "accepted {accepted}/100 while hot");
    }

    #[test]
    fn cools_by_the_rate_per_evaluation() {
        let mut selector = SimulatedAnnealing::with_seed(0.25, 9);
        let _ = selector.pick(-3.0, pool_of(&[-1.0]));
        assert!((selector.temperature() - 0.75).abs() < 1e-12);
    }
}
