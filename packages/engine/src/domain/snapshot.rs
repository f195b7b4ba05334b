//! Public read models for observing session state without exposing hands.

use serde::Serialize;

use super::cards_logic::playable_cards;
use super::cards_types::Card;
use super::participant::{Participant, ParticipantId};
use super::scoring::FinalScore;
use super::state::{GameState, SessionPhase};
use crate::errors::GameError;

/// Public info about a single seat: everything except hand contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantPublic {
    pub id: ParticipantId,
    pub name: String,
    pub card_count: usize,
    pub declared_last_card: bool,
    pub is_bot: bool,
}

impl ParticipantPublic {
    fn of(p: &Participant) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            card_count: p.hand_size(),
            declared_last_card: p.declared_last_card,
            is_bot: p.is_bot(),
        }
    }
}

/// Broadcast view of a session, safe to send to every client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub participants: Vec<ParticipantPublic>,
    /// Play order starting from the current participant.
    pub turn_order: Vec<ParticipantId>,
    pub current: Option<ParticipantId>,
    pub top_card: Option<Card>,
    pub clockwise: bool,
    pub pending_draw: u8,
    pub draw_pile_size: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub final_scores: Vec<FinalScore>,
}

/// Per-participant view: the broadcast view plus that participant's own hand
/// and which of its cards are currently playable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalSnapshot {
    #[serde(flatten)]
    pub shared: SessionSnapshot,
    pub hand: Vec<Card>,
    pub playable: Vec<Card>,
}

pub fn snapshot(state: &GameState) -> SessionSnapshot {
    SessionSnapshot {
        phase: state.phase,
        participants: state.participants.iter().map(ParticipantPublic::of).collect(),
        turn_order: state.order.order_from_current(),
        current: state.order.current(),
        top_card: state.discard_pile.last().copied(),
        clockwise: state.order.clockwise(),
        pending_draw: state.pending_draw,
        draw_pile_size: state.draw_pile.len(),
        final_scores: state.final_scores.clone(),
    }
}

pub fn personal_snapshot(
    state: &GameState,
    who: ParticipantId,
) -> Result<PersonalSnapshot, GameError> {
    let participant = state.participant(who)?;
    let playable = match state.discard_pile.last() {
        Some(&top) if state.phase.is_active() => {
            playable_cards(&participant.hand, top, state.pending_draw, &state.rules)
        }
        _ => Vec::new(),
    };
    Ok(PersonalSnapshot {
        shared: snapshot(state),
        hand: participant.hand.clone(),
        playable,
    })
}
