//! Configuration-driven construction of climbs and selectors.

use wayfarer_config::{LocalSearchConfig, StrategyConfig};
use wayfarer_core::{Heuristic, State};

use crate::climb::HillClimbing;
use crate::strategy::{
    Candidate, SimulatedAnnealing, SteepestAscent, Stochastic, SuccessorSelector,
};

/// A successor selector chosen at runtime from a [`StrategyConfig`].
#[derive(Debug)]
pub enum ConfiguredSelector {
    SteepestAscent(SteepestAscent),
    Stochastic(Stochastic),
    SimulatedAnnealing(SimulatedAnnealing),
}

impl<S: State> SuccessorSelector<S> for ConfiguredSelector {
    fn pick(&mut self, current_score: f64, pool: Vec<Candidate<S>>) -> Option<Candidate<S>> {
        match self {
            Self::SteepestAscent(selector) => selector.pick(current_score, pool),
            Self::Stochastic(selector) => selector.pick(current_score, pool),
            Self::SimulatedAnnealing(selector) => selector.pick(current_score, pool),
        }
    }

    fn allows_downhill_moves(&self) -> bool {
        match self {
            Self::SteepestAscent(selector) => {
                SuccessorSelector::<S>::allows_downhill_moves(selector)
            }
            Self::Stochastic(selector) => SuccessorSelector::<S>::allows_downhill_moves(selector),
            Self::SimulatedAnnealing(selector) => {
                SuccessorSelector::<S>::allows_downhill_moves(selector)
            }
        }
    }
}

/// Builds a fresh selector for the configured strategy.
///
/// With a seed the selector is reproducible; without one it draws its
/// randomness from OS entropy.
pub fn selector_from_config(strategy: &StrategyConfig, seed: Option<u64>) -> ConfiguredSelector {
    match *strategy {
        StrategyConfig::SteepestAscent => ConfiguredSelector::SteepestAscent(match seed {
            Some(seed) => SteepestAscent::with_seed(seed),
            None => SteepestAscent::new(),
        }),
        StrategyConfig::Stochastic => ConfiguredSelector::Stochastic(match seed {
            Some(seed) => Stochastic::with_seed(seed),
            None => Stochastic::new(),
        }),
        StrategyConfig::SimulatedAnnealing { cooling_rate } => {
            ConfiguredSelector::SimulatedAnnealing(match seed {
                Some(seed) => SimulatedAnnealing::with_seed(cooling_rate, seed),
                None => SimulatedAnnealing::new(cooling_rate),
            })
        }
    }
}

/// Builds a hill climb from a [`LocalSearchConfig`].
///
/// The restart section of the config is ignored here; wrap the climb in a
/// [`crate::RandomRestart`] to honour it.
pub fn climb_from_config<S: State, H: Heuristic<S>>(
    start_state: S,
    heuristic: H,
    config: &LocalSearchConfig,
) -> HillClimbing<S, H, ConfiguredSelector> {
    let selector = selector_from_config(&config.strategy, config.random_seed);
    HillClimbing::new(start_state, heuristic, selector)
        .with_max_plateau_moves(config.max_plateau_moves)
}

#[cfg(test)]
mod tests {
    use wayfarer_test::queens::{ClashCountHeuristic, QueensState};

    use crate::climb::StepOutcome;

    use super::*;

    #[test]
    fn builds_the_configured_strategy() {
        let steepest = selector_from_config(&StrategyConfig::SteepestAscent, Some(1));
        assert!(matches!(&steepest, ConfiguredSelector::SteepestAscent(_)));
        assert!(!SuccessorSelector::<QueensState>::allows_downhill_moves(
            &steepest
        ));

        let annealing = selector_from_config(
            &StrategyConfig::SimulatedAnnealing { cooling_rate: 0.1 },
            Some(1),
        );
        assert!(matches!(
            &annealing,
            ConfiguredSelector::SimulatedAnnealing(_)
        ));
        assert!(SuccessorSelector::<QueensState>::allows_downhill_moves(
            &annealing
        ));
    }

    #[test]
    fn configured_climb_runs_to_termination() {
        let config = LocalSearchConfig::from_toml_str(
            r#"
            random_seed = 37
            max_plateau_moves = 50

            [strategy]
            type = "stochastic"
            "#,
        )
        .unwrap();

        let start = QueensState::new(vec![0; 6]).unwrap();
        let start_clashes = start.count_clashes();
        let mut climb = climb_from_config(start, ClashCountHeuristic, &config);
        while climb.step() == StepOutcome::Moved {}
        assert!(climb.current().count_clashes() <= start_clashes);
    }
}
