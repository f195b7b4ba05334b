//! Central error type used across the engine.
//!
//! Every failure here is a synchronous validation or invariant error: the
//! caller (a transport layer, a bot driver, a test) surfaces it to the
//! originating client as a rejected action. Validation happens strictly
//! before any state change, so an `Err` always leaves the session untouched.

use thiserror::Error;

/// Central engine error taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Action is not permitted in the session's current phase.
    #[error("invalid state transition: {action} not permitted while {phase}")]
    InvalidStateTransition { phase: &'static str, action: String },

    /// Acting participant is not the current participant.
    #[error("not your turn: {actor}")]
    NotYourTurn { actor: String },

    /// Played card is not in the acting participant's hand.
    #[error("card not in hand: {card}")]
    CardNotInHand { card: String },

    /// Card fails the legality predicate against the discard top.
    #[error("illegal play: {card} on {top}")]
    IllegalPlay { card: String, top: String },

    /// A non-stacking card was submitted while a draw obligation is outstanding.
    #[error("must resolve pending draw of {pending} first")]
    MustResolvePendingDraw { pending: u8 },

    /// Last-card declaration with the wrong hand size, already declared,
    /// or a challenge that does not catch anything.
    #[error("invalid declaration: {detail}")]
    InvalidDeclaration { detail: String },

    /// Wild play without a color choice, a color choice on a non-wild play,
    /// or a choice of the unresolved wild color.
    #[error("invalid color choice: {detail}")]
    InvalidColorChoice { detail: String },

    /// Session id already present in the registry.
    #[error("duplicate session: {id}")]
    DuplicateSession { id: String },

    /// Session id not present in the registry.
    #[error("session not found: {id}")]
    SessionNotFound { id: String },

    /// Start attempted with a participant count outside 2..=4.
    #[error("cannot start with {count} participants")]
    EmptyRoomOnStart { count: usize },

    /// Join attempted on a session already at capacity.
    #[error("session is full ({capacity} seats)")]
    SessionFull { capacity: usize },

    /// Participant id not tracked by the session.
    #[error("unknown participant: {id}")]
    UnknownParticipant { id: String },

    /// No decision strategy registered under the given name.
    #[error("unknown strategy: {name}")]
    UnknownStrategy { name: String },

    /// Card token that does not parse.
    #[error("unparseable card token: {token}")]
    ParseCard { token: String },

    /// Undo requested with no applied command in the history.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Redo requested with no undone tail in the history.
    #[error("nothing to redo")]
    NothingToRedo,

    /// Undo requested on a command that cannot be reversed.
    #[error("command is not reversible: {detail}")]
    IrreversibleCommand { detail: String },

    /// An internal invariant was violated. The operation is aborted with
    /// prior state intact; a corrupted turn order is unrecoverable mid-game.
    #[error("internal invariant violated: {detail}")]
    InternalInvariant { detail: String },
}

impl GameError {
    pub fn invalid_transition(phase: &'static str, action: impl Into<String>) -> Self {
        Self::InvalidStateTransition {
            phase,
            action: action.into(),
        }
    }

    pub fn invalid_declaration(detail: impl Into<String>) -> Self {
        Self::InvalidDeclaration {
            detail: detail.into(),
        }
    }

    pub fn invalid_color(detail: impl Into<String>) -> Self {
        Self::InvalidColorChoice {
            detail: detail.into(),
        }
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::InternalInvariant {
            detail: detail.into(),
        }
    }
}
