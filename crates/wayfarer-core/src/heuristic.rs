//! Heuristic scoring of states.

use crate::num;
use crate::state::State;

/// A heuristic function judging the quality of states.
///
/// Quality scores follow a "higher is better" convention: a state whose score
/// reaches [`optimal_score`](Heuristic::optimal_score) within the float
/// comparison margin is considered optimal.
pub trait Heuristic<S: State> {
    /// Computes the quality score of a state.
    ///
    /// This is the raw heuristic function; callers should go through
    /// [`quality_score`](Heuristic::quality_score) instead, which caches the
    /// result on the state.
    fn estimate(&self, state: &S) -> f64;

    /// The best score any state can achieve under this heuristic.
    ///
    /// A state with this score can be regarded as a goal state.
    fn optimal_score(&self) -> f64;

    /// Returns the state's quality score, computing and caching it on first
    /// use.
    ///
    /// Once a score has been stored it is never recomputed.
    fn quality_score(&self, state: &mut S) -> f64 {
        if let Some(score) = state.quality_score() {
            return score;
        }
        let score = self.estimate(state);
        state.set_quality_score(score);
        score
    }

    /// Returns true if `score` is the best score achievable under this
    /// heuristic, within the float comparison margin.
    fn is_optimal(&self, score: f64) -> bool {
        self.is_within_margin(score, 0.0)
    }

    /// Returns true if `score` lies within `margin` of the optimal score.
    fn is_within_margin(&self, score: f64, margin: f64) -> bool {
        score + margin + num::FLOAT_COMPARISON_MARGIN >= self.optimal_score()
    }
}
