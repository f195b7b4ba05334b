//! The last-card declaration command.

use time::OffsetDateTime;

use super::{ensure_active, Command, CommandOutcome};
use crate::domain::state::GameState;
use crate::domain::ParticipantId;
use crate::errors::GameError;
use crate::events::GameEvent;

/// Declare holding exactly one card. May be made out of turn; holds the
/// turn. An omitted declaration is caught via the session's challenge
/// operation, which is not a command.
#[derive(Debug)]
pub struct DeclareLastCard {
    actor: ParticipantId,
    timestamp: OffsetDateTime,
    executed: bool,
}

impl DeclareLastCard {
    pub fn new(actor: ParticipantId) -> Self {
        Self {
            actor,
            timestamp: OffsetDateTime::now_utc(),
            executed: false,
        }
    }
}

impl Command for DeclareLastCard {
    fn actor(&self) -> ParticipantId {
        self.actor
    }

    fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    fn describe(&self) -> String {
        "declare last card".to_string()
    }

    fn validate(&self, state: &GameState) -> Result<(), GameError> {
        ensure_active(state, "declare last card")?;
        let participant = state.participant(self.actor)?;
        if participant.hand_size() != 1 {
            return Err(GameError::invalid_declaration(format!(
                "hand holds {} cards, declaration requires exactly 1",
                participant.hand_size()
            )));
        }
        if participant.declared_last_card {
            return Err(GameError::invalid_declaration("already declared"));
        }
        Ok(())
    }

    fn execute(&mut self, state: &mut GameState) -> Result<CommandOutcome, GameError> {
        state.participant_mut(self.actor)?.declared_last_card = true;
        self.executed = true;
        Ok(CommandOutcome {
            events: vec![GameEvent::DeclarationMade {
                participant: self.actor,
            }],
            concluded: false,
        })
    }

    fn undo(&mut self, state: &mut GameState) -> Result<(), GameError> {
        if !self.executed {
            return Err(GameError::invariant(
                "undo of an unexecuted declaration command",
            ));
        }
        state.participant_mut(self.actor)?.declared_last_card = false;
        self.executed = false;
        Ok(())
    }
}
