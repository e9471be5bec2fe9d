//! Random-restart wrapper around hill climbing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wayfarer_config::{LocalSearchConfig, RestartConfig, StrategyConfig};
use wayfarer_core::{Heuristic, State};

use crate::climb::HillClimbing;
use crate::factory::selector_from_config;

/// Repeats hill climbing from fresh random starts until a run ends within
/// the quality margin of the heuristic's optimum, or the iteration cap is
/// reached.
///
/// Every run gets a freshly constructed start state and a fresh selector
/// whose seed is derived from this wrapper's own RNG, so a seeded wrapper
/// replays the exact same sequence of runs. The result is always the final
/// state of the *latest* run, whether or not it reached the margin; `None`
/// is returned only when the cap forbids any run at all.
#[derive(Debug)]
pub struct RandomRestart<H> {
    heuristic: H,
    strategy: StrategyConfig,
    max_plateau_moves: u32,
    max_iterations: Option<u32>,
    quality_margin: f64,
    rng: StdRng,
    iterations_performed: u32,
}

impl<H> RandomRestart<H> {
    /// Creates a wrapper from a [`LocalSearchConfig`].
    ///
    /// A missing `[restart]` section means a single unconditional run: no
    /// iteration cap would loop forever on unreachable margins, so the cap
    /// defaults to one rather than unbounded.
    pub fn new(heuristic: H, config: &LocalSearchConfig) -> Self {
        let restart = config.restart.clone().unwrap_or(RestartConfig {
            max_iterations: Some(1),
            quality_margin: 0.0,
        });
        Self {
            heuristic,
            strategy: config.strategy.clone(),
            max_plateau_moves: config.max_plateau_moves,
            max_iterations: restart.max_iterations,
            quality_margin: restart.quality_margin,
            rng: match config.random_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            },
            iterations_performed: 0,
        }
    }

    /// The number of hill-climbing runs made by the latest [`run`] call.
    ///
    /// [`run`]: Self::run
    pub fn iterations_performed(&self) -> u32 {
        self.iterations_performed
    }

    /// Climbs repeatedly, constructing each run's start state with the
    /// given closure.
    ///
    /// Returns the final state of the last run made, or `None` when the
    /// iteration cap is zero.
    pub fn run<S, F>(&mut self, mut construct_start: F) -> Option<S>
    where
        S: State,
        H: Heuristic<S> + Clone,
        F: FnMut(&mut StdRng) -> S,
    {
        self.iterations_performed = 0;
        let mut latest: Option<S> = None;

        loop {
            if let Some(max) = self.max_iterations {
                if self.iterations_performed >= max {
                    tracing::debug!(iterations = self.iterations_performed, "iteration cap hit");
                    break;
                }
            }

            let selector = selector_from_config(&self.strategy, Some(self.rng.random()));
            let start = construct_start(&mut self.rng);
            let mut result = HillClimbing::new(start, self.heuristic.clone(), selector)
                .with_max_plateau_moves(self.max_plateau_moves)
                .run();
            self.iterations_performed += 1;

            let score = self.heuristic.quality_score(&mut result);
            let within_margin = self.heuristic.is_within_margin(score, self.quality_margin);
            tracing::info!(
                iteration = self.iterations_performed,
                score,
                within_margin,
                "restart run finished"
            );

            latest = Some(result);
            if within_margin {
                break;
            }
        }

        latest
    }
}

#[cfg(test)]
mod tests {
    use wayfarer_test::queens::{ClashCountHeuristic, QueensState};

    use super::*;

    fn config(toml: &str) -> LocalSearchConfig {
        LocalSearchConfig::from_toml_str(toml).unwrap()
    }

    #[test]
    fn restarts_until_eight_queens_is_solved() {
        let config = config(
            r#"
            random_seed = 83
            max_plateau_moves = 100

            [restart]
            quality_margin = 0.0
            "#,
        );

        let mut restart = RandomRestart::new(ClashCountHeuristic, &config);
        let solved = restart
            .run(|rng| QueensState::random(rng, 8))
            .expect("at least one run is always made without a cap");

        assert_eq!(solved.count_clashes(), 0);
        assert!(restart.iterations_performed() >= 1);
    }

    #[test]
    fn a_zero_iteration_cap_makes_no_runs() {
        let config = config(
            r#"
            random_seed = 83

            [restart]
            max_iterations = 0
            "#,
        );

        let mut restart = RandomRestart::new(ClashCountHeuristic, &config);
        let result: Option<QueensState> = restart.run(|rng| QueensState::random(rng, 8));
        assert!(result.is_none());
        assert_eq!(restart.iterations_performed(), 0);
    }

    #[test]
    fn an_unreachable_margin_stops_at_the_cap() {
        // Three queens cannot be placed without a clash, so the margin of
        // zero is never met and every permitted run is made.
        let config = config(
            r#"
            random_seed = 5
            max_plateau_moves = 10

            [restart]
            max_iterations = 4
            quality_margin = 0.0
            "#,
        );

        let mut restart = RandomRestart::new(ClashCountHeuristic, &config);
        let latest = restart
            .run(|rng| QueensState::random(rng, 3))
            .expect("a capped search still returns its latest run");

        assert!(latest.count_clashes() >= 1);
        assert_eq!(restart.iterations_performed(), 4);
    }

    #[test]
    fn a_wide_margin_accepts_the_first_run() {
        let config = config(
            r#"
            random_seed = 7
            max_plateau_moves = 10

            [restart]
            quality_margin = 100.0
            "#,
        );

        let mut restart = RandomRestart::new(ClashCountHeuristic, &config);
        let result = restart.run(|rng| QueensState::random(rng, 8));
        assert!(result.is_some());
        assert_eq!(restart.iterations_performed(), 1);
    }

    #[test]
    fn a_missing_restart_section_means_one_run() {
        let config = config(
            r#"
            random_seed = 11
            max_plateau_moves = 10
            "#,
        );

        let mut restart = RandomRestart::new(ClashCountHeuristic, &config);
        let result = restart.run(|rng| QueensState::random(rng, 6));
        assert!(result.is_some());
        assert_eq!(restart.iterations_performed(), 1);
    }
}
