//! Participants: human or bot-controlled seats in a session.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cards_types::Card;

/// Stable identity of a seat across the session's lifetime.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Who drives a seat. A closed enum rather than subclassing: the controller
/// of a seat can change mid-game (bot takeover), its identity cannot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Controller {
    Human { connected: bool },
    Bot { strategy: String },
}

/// A seat in a session.
///
/// The hand is exclusively owned here; the session exposes only counts to
/// other participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub hand: Vec<Card>,
    pub declared_last_card: bool,
    pub controller: Controller,
}

impl Participant {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
            hand: Vec::new(),
            declared_last_card: false,
            controller: Controller::Human { connected: true },
        }
    }

    pub fn bot(name: impl Into<String>, strategy: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
            hand: Vec::new(),
            declared_last_card: false,
            controller: Controller::Bot {
                strategy: strategy.into(),
            },
        }
    }

    pub fn is_bot(&self) -> bool {
        matches!(self.controller, Controller::Bot { .. })
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Position of `card` in the hand, if held.
    pub fn card_position(&self, card: Card) -> Option<usize> {
        self.hand.iter().position(|&c| c == card)
    }
}
