//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod effects;
pub mod participant;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod turn_order;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_effects;
#[cfg(test)]
mod tests_legality;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_turn_order;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_turn_order;

// Re-exports for ergonomics
pub use cards_logic::{has_playable_card, is_legal_play, playable_cards};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, CardColor, CardKind};
pub use participant::{Controller, Participant, ParticipantId};
pub use rules::HouseRules;
pub use scoring::{score_hands, FinalScore, ScoreTable};
pub use snapshot::{PersonalSnapshot, SessionSnapshot};
pub use state::{GameState, SessionPhase};
pub use turn_order::TurnSequencer;
