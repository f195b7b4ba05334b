#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Authoritative server-side engine for a 2-4 player, UNO-style card game.
//!
//! The engine owns turn order, card legality, effect resolution, reversible
//! action commands, the session state machine, and a concurrent session
//! registry. It opens no sockets and persists nothing: a transport layer
//! submits [`PlayerAction`]s and mirrors state to clients through the
//! [`EventSink`] it injects.

pub mod ai;
pub mod commands;
pub mod domain;
pub mod errors;
pub mod events;
pub mod session;
pub mod utils;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use ai::{Decision, DecisionStrategy, DecisionView};
pub use domain::{
    Card, CardColor, CardKind, FinalScore, HouseRules, Participant, ParticipantId, ScoreTable,
    SessionPhase,
};
pub use errors::GameError;
pub use events::{EventSink, GameEvent, NullSink};
pub use session::{PlayerAction, RegistryStats, Session, SessionId, SessionRegistry};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
