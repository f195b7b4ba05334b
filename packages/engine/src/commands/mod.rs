//! Player-initiated mutations as reversible command objects.
//!
//! Each command validates strictly before mutating, executes against the
//! domain state, and can undo itself from a snapshot captured at execution
//! time. The session appends executed commands to a bounded history;
//! undoing steps a cursor back, and a fresh command discards the redo tail.

use std::fmt;

use time::OffsetDateTime;

use crate::domain::scoring::score_hands;
use crate::domain::state::{GameState, SessionPhase};
use crate::domain::ParticipantId;
use crate::errors::GameError;
use crate::events::GameEvent;

mod declare_last_card;
mod draw_card;
mod play_card;

pub use declare_last_card::DeclareLastCard;
pub use draw_card::DrawCard;
pub(crate) use draw_card::reshuffle_from_discard;
pub use play_card::PlayCard;

/// What a committed command asks the session to announce.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub events: Vec<GameEvent>,
    pub concluded: bool,
}

/// Contract for a player-initiated mutation.
///
/// `validate` must be free of side effects; `execute` performs every state
/// change the command owns, including turn advancement, so that `undo` can
/// restore the exact prior position.
pub trait Command: fmt::Debug + Send {
    fn actor(&self) -> ParticipantId;
    fn timestamp(&self) -> OffsetDateTime;
    fn describe(&self) -> String;
    fn validate(&self, state: &GameState) -> Result<(), GameError>;
    fn execute(&mut self, state: &mut GameState) -> Result<CommandOutcome, GameError>;
    fn is_reversible(&self) -> bool {
        true
    }
    fn undo(&mut self, state: &mut GameState) -> Result<(), GameError>;
}

/// Turn-level state captured before a command executes, restored on undo.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TurnSnapshot {
    phase: SessionPhase,
    current: Option<ParticipantId>,
    clockwise: bool,
    pending_draw: u8,
    actor_declared: bool,
}

impl TurnSnapshot {
    pub(crate) fn capture(state: &GameState, actor: ParticipantId) -> Result<Self, GameError> {
        Ok(Self {
            phase: state.phase,
            current: state.order.current(),
            clockwise: state.order.clockwise(),
            pending_draw: state.pending_draw,
            actor_declared: state.participant(actor)?.declared_last_card,
        })
    }

    pub(crate) fn restore(
        &self,
        state: &mut GameState,
        actor: ParticipantId,
    ) -> Result<(), GameError> {
        if !self.phase.is_concluded() && state.phase.is_concluded() {
            state.final_scores.clear();
        }
        state.phase = self.phase;
        state.pending_draw = self.pending_draw;
        state.order.set_direction(self.clockwise);
        if let Some(current) = self.current {
            state.order.set_current(current)?;
        }
        state.participant_mut(actor)?.declared_last_card = self.actor_declared;
        Ok(())
    }
}

/// Reject a command whose actor is not the current participant.
pub(crate) fn ensure_current(state: &GameState, actor: ParticipantId) -> Result<(), GameError> {
    if state.require_current()? != actor {
        return Err(GameError::NotYourTurn {
            actor: actor.to_string(),
        });
    }
    Ok(())
}

/// Reject a command outside the active phase.
pub(crate) fn ensure_active(state: &GameState, action: &str) -> Result<(), GameError> {
    if !state.phase.is_active() {
        return Err(GameError::invalid_transition(state.phase.name(), action));
    }
    Ok(())
}

/// Transition to Concluded, score remaining hands, and build the terminal
/// event carried to the persistence collaborator.
pub(crate) fn conclude(state: &mut GameState, winner: Option<ParticipantId>) -> GameEvent {
    let scores = score_hands(&state.participants, winner, &state.rules.score_table);
    state.final_scores = scores.clone();
    state.phase = SessionPhase::Concluded { winner };
    let duration_seconds = state
        .started_at
        .map(|t| (OffsetDateTime::now_utc() - t).whole_seconds())
        .unwrap_or(0);
    GameEvent::SessionConcluded {
        winner,
        scores,
        duration_seconds,
        participants: state.participants.iter().map(|p| p.id).collect(),
    }
}

/// One line of the session's command log.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub description: String,
    pub actor: ParticipantId,
    pub timestamp: OffsetDateTime,
    /// False for entries sitting in the undone (redo) tail.
    pub applied: bool,
}

/// Append-only command log with an undo cursor.
///
/// Bounded: once the log exceeds `max` entries the oldest are compacted
/// away, which also caps how far back undo can reach in long sessions.
#[derive(Debug)]
pub struct CommandHistory {
    entries: Vec<Box<dyn Command>>,
    cursor: usize,
    max: usize,
}

impl CommandHistory {
    pub fn new(max: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max: max.max(1),
        }
    }

    /// Append an executed command, discarding any redo tail.
    pub fn record(&mut self, command: Box<dyn Command>) {
        self.entries.truncate(self.cursor);
        self.entries.push(command);
        if self.entries.len() > self.max {
            let excess = self.entries.len() - self.max;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len();
    }

    /// Undo the most recently applied command.
    pub fn undo(&mut self, state: &mut GameState) -> Result<String, GameError> {
        if self.cursor == 0 {
            return Err(GameError::NothingToUndo);
        }
        let command = &mut self.entries[self.cursor - 1];
        if !command.is_reversible() {
            return Err(GameError::IrreversibleCommand {
                detail: command.describe(),
            });
        }
        command.undo(state)?;
        self.cursor -= 1;
        Ok(self.entries[self.cursor].describe())
    }

    /// Re-apply the first command of the undone tail, re-validating it
    /// against the present state.
    pub fn redo(&mut self, state: &mut GameState) -> Result<(String, CommandOutcome), GameError> {
        if self.cursor == self.entries.len() {
            return Err(GameError::NothingToRedo);
        }
        let command = &mut self.entries[self.cursor];
        command.validate(state)?;
        let outcome = command.execute(state)?;
        self.cursor += 1;
        Ok((self.entries[self.cursor - 1].describe(), outcome))
    }

    pub fn applied_len(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Descriptive log of all retained commands, oldest first.
    pub fn log(&self) -> Vec<HistoryEntry> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, c)| HistoryEntry {
                description: c.describe(),
                actor: c.actor(),
                timestamp: c.timestamp(),
                applied: i < self.cursor,
            })
            .collect()
    }
}
