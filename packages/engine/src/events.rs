//! Domain events and the sink capability the session announces them through.
//!
//! The session calls the sink synchronously after each committed mutation;
//! the transport layer owns subscriber multiplicity and wire encoding. The
//! engine fixes no wire format — events are plain serde-serializable values.

use serde::Serialize;

use crate::domain::{Card, CardColor, FinalScore, ParticipantId};
use crate::session::SessionId;

/// Everything a transport needs to mirror session state to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    SessionStarted {
        starting_participant: ParticipantId,
        top_card: Card,
    },
    CardPlayed {
        participant: ParticipantId,
        card: Card,
    },
    ColorChosen {
        participant: ParticipantId,
        color: CardColor,
    },
    CardsDrawn {
        participant: ParticipantId,
        count: u8,
    },
    DeclarationMade {
        participant: ParticipantId,
    },
    DeclarationPenaltyApplied {
        participant: ParticipantId,
        challenger: ParticipantId,
        penalty: u8,
    },
    TurnChanged {
        participant: ParticipantId,
    },
    DirectionReversed {
        clockwise: bool,
    },
    ParticipantSkipped {
        participant: ParticipantId,
    },
    ParticipantJoined {
        participant: ParticipantId,
        name: String,
    },
    ParticipantLeft {
        participant: ParticipantId,
    },
    ParticipantReplacedByBot {
        participant: ParticipantId,
        strategy: String,
    },
    SessionPaused,
    SessionResumed,
    ActionUndone {
        description: String,
    },
    ActionRedone {
        description: String,
    },
    /// Terminal event; carries the tuple handed to the persistence/ranking
    /// collaborator. `scores` is ordered best placement first.
    SessionConcluded {
        winner: Option<ParticipantId>,
        scores: Vec<FinalScore>,
        duration_seconds: i64,
        participants: Vec<ParticipantId>,
    },
}

/// Capability the session publishes committed mutations through.
///
/// Called while the session's exclusion primitive is held, so
/// implementations must be fast and must not call back into the session.
pub trait EventSink: Send + Sync {
    fn publish(&self, session: &SessionId, event: &GameEvent);
}

/// Sink that drops everything. Useful for simulations and tests that only
/// inspect state.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&self, _session: &SessionId, _event: &GameEvent) {}
}
