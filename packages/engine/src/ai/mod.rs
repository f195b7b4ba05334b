//! Decision strategies for bot-controlled participants.

pub mod heuristic;
pub mod random;
pub mod registry;
pub mod trait_def;

pub use heuristic::HeuristicStrategy;
pub use random::RandomStrategy;
pub use registry::{by_name, create_strategy, registered_strategies, StrategyFactory};
pub use trait_def::{Decision, DecisionStrategy, DecisionView, StrategyError};
