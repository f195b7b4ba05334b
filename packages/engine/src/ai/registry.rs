//! How to register a strategy
//!
//! 1) Implement `DecisionStrategy` for your type in its module.
//! 2) Add a `StrategyFactory` entry to the static list with stable `name`
//!    and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).

use super::{DecisionStrategy, HeuristicStrategy, RandomStrategy};
use crate::errors::GameError;

/// Factory definition for constructing strategy implementations.
pub struct StrategyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn DecisionStrategy>,
}

static STRATEGY_FACTORIES: &[StrategyFactory] = &[
    StrategyFactory {
        name: RandomStrategy::NAME,
        version: RandomStrategy::VERSION,
        make: make_random,
    },
    StrategyFactory {
        name: HeuristicStrategy::NAME,
        version: HeuristicStrategy::VERSION,
        make: make_heuristic,
    },
];

/// Returns the statically registered strategy factories.
pub fn registered_strategies() -> &'static [StrategyFactory] {
    STRATEGY_FACTORIES
}

/// Finds a registered strategy factory by its name.
pub fn by_name(name: &str) -> Option<&'static StrategyFactory> {
    registered_strategies()
        .iter()
        .find(|factory| factory.name == name)
}

/// Construct a strategy by registry name.
pub fn create_strategy(name: &str, seed: Option<u64>) -> Result<Box<dyn DecisionStrategy>, GameError> {
    let factory = by_name(name).ok_or_else(|| GameError::UnknownStrategy {
        name: name.to_string(),
    })?;
    Ok((factory.make)(seed))
}

fn make_random(seed: Option<u64>) -> Box<dyn DecisionStrategy> {
    Box::new(RandomStrategy::new(seed))
}

fn make_heuristic(_seed: Option<u64>) -> Box<dyn DecisionStrategy> {
    Box::new(HeuristicStrategy::new())
}
