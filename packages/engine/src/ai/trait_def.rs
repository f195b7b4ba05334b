//! Decision strategy trait definition.

use std::fmt;

use crate::domain::cards_logic::playable_cards;
use crate::domain::{Card, CardColor, HouseRules, ParticipantId};
use crate::errors::GameError;

/// Errors that can occur during strategy decision-making.
#[derive(Debug)]
pub enum StrategyError {
    /// Strategy encountered an internal error
    Internal(String),
    /// Strategy produced no usable decision
    InvalidMove(String),
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::Internal(msg) => write!(f, "strategy internal error: {msg}"),
            StrategyError::InvalidMove(msg) => write!(f, "strategy invalid move: {msg}"),
        }
    }
}

impl std::error::Error for StrategyError {}

impl From<StrategyError> for GameError {
    fn from(err: StrategyError) -> Self {
        GameError::invariant(format!("strategy failure: {err}"))
    }
}

/// Everything a strategy may look at when deciding: its own hand, the
/// active discard top, the outstanding draw obligation, the house rules,
/// and the public card counts of the other seats.
#[derive(Debug, Clone, Copy)]
pub struct DecisionView<'a> {
    pub hand: &'a [Card],
    pub top_card: Card,
    pub pending_draw: u8,
    pub rules: &'a HouseRules,
    pub opponent_counts: &'a [(ParticipantId, usize)],
}

impl DecisionView<'_> {
    /// Legal responses from this hand right now.
    pub fn playable(&self) -> Vec<Card> {
        playable_cards(self.hand, self.top_card, self.pending_draw, self.rules)
    }
}

/// A strategy's chosen move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Play {
        card: Card,
        /// Required when `card` is wild.
        chosen_color: Option<CardColor>,
        /// Declare last card after this play resolves.
        declare: bool,
    },
    /// No playable card, or the strategy declines to stack.
    Draw,
}

/// Trait for bot decision-making.
///
/// Implementations receive the visible game state and must choose a legal
/// move; they are invoked synchronously inside the session's serialized
/// execution window, so they must be fast and must not block.
pub trait DecisionStrategy: Send + Sync {
    fn decide(&self, view: &DecisionView<'_>) -> Result<Decision, StrategyError>;
}
