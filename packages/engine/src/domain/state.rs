//! Session-internal game state container and invariant helpers.

use serde::Serialize;
use time::OffsetDateTime;

use super::cards_types::Card;
use super::participant::{Participant, ParticipantId};
use super::rules::HouseRules;
use super::scoring::FinalScore;
use super::turn_order::TurnSequencer;
use crate::errors::GameError;

/// Session lifecycle phases. `Concluded` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SessionPhase {
    /// Session created; participants may join and leave.
    Forming,
    /// Game in progress. A paused session rejects commands until resumed.
    Active { paused: bool },
    /// Game over. `winner` is absent when the session was abandoned.
    Concluded { winner: Option<ParticipantId> },
}

impl SessionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            SessionPhase::Forming => "forming",
            SessionPhase::Active { .. } => "active",
            SessionPhase::Concluded { .. } => "concluded",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SessionPhase::Active { .. })
    }

    pub fn is_concluded(&self) -> bool {
        matches!(self, SessionPhase::Concluded { .. })
    }
}

/// Entire per-session game state, sufficient for pure domain operations.
///
/// Both piles are stacks with the top at the back. The discard top is the
/// currently active card; its color is always concrete once the session has
/// started.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: SessionPhase,
    pub participants: Vec<Participant>,
    pub order: TurnSequencer,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    /// Accumulated forced-draw obligation awaiting the next participant.
    pub pending_draw: u8,
    pub rules: HouseRules,
    /// Seed driving the opening shuffle and any mid-game reshuffles.
    pub rng_seed: u64,
    pub started_at: Option<OffsetDateTime>,
    /// Populated once, at conclusion.
    pub final_scores: Vec<FinalScore>,
}

impl GameState {
    pub fn new(rules: HouseRules) -> Self {
        Self {
            phase: SessionPhase::Forming,
            participants: Vec::new(),
            order: TurnSequencer::new(),
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            pending_draw: 0,
            rules,
            rng_seed: 0,
            started_at: None,
            final_scores: Vec::new(),
        }
    }

    pub fn participant(&self, id: ParticipantId) -> Result<&Participant, GameError> {
        self.participants
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| GameError::UnknownParticipant { id: id.to_string() })
    }

    pub fn participant_mut(&mut self, id: ParticipantId) -> Result<&mut Participant, GameError> {
        self.participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| GameError::UnknownParticipant { id: id.to_string() })
    }

    /// Exactly one participant is current while the session is active.
    pub fn require_current(&self) -> Result<ParticipantId, GameError> {
        self.order
            .current()
            .ok_or_else(|| GameError::invariant("no current participant in an active session"))
    }

    /// The discard top must exist from the opening flip onward.
    pub fn require_top_discard(&self) -> Result<Card, GameError> {
        self.discard_pile
            .last()
            .copied()
            .ok_or_else(|| GameError::invariant("discard pile unexpectedly empty"))
    }

    /// Step the reshuffle seed sequence. Deterministic given the opening
    /// seed, so replayed histories reshuffle identically.
    pub fn next_reshuffle_seed(&mut self) -> u64 {
        self.rng_seed = self
            .rng_seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.rng_seed
    }

    /// Public card counts per participant, in seating order.
    pub fn hand_counts(&self) -> Vec<(ParticipantId, usize)> {
        self.participants
            .iter()
            .map(|p| (p.id, p.hand_size()))
            .collect()
    }
}
