//! Session state machine: which operations each phase permits, and the
//! Forming → Active transition.

use rand::prelude::*;

use crate::domain::dealing::{deal_hands, flip_starting_card, full_deck};
use crate::domain::rules::{MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use crate::domain::state::{GameState, SessionPhase};
use crate::errors::GameError;
use crate::events::GameEvent;
use time::OffsetDateTime;

/// Operation classes gated by the state machine. Command execution is a
/// single class here; per-command preconditions live on the commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Join,
    Leave,
    AddBot,
    Start,
    SubmitCommand,
    Challenge,
    Pause,
    Resume,
    Undo,
    Redo,
    ReplaceWithBot,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Operation::Join => "join",
            Operation::Leave => "leave",
            Operation::AddBot => "add bot",
            Operation::Start => "start",
            Operation::SubmitCommand => "submit command",
            Operation::Challenge => "challenge declaration",
            Operation::Pause => "pause",
            Operation::Resume => "resume",
            Operation::Undo => "undo",
            Operation::Redo => "redo",
            Operation::ReplaceWithBot => "replace with bot",
        }
    }
}

/// Single source of truth for phase legality. Concluded is terminal: once
/// left behind, no phase is ever re-entered, which is why undo is only
/// permitted while active.
pub fn permits(phase: SessionPhase, op: Operation) -> Result<(), GameError> {
    let allowed = match (phase, op) {
        (
            SessionPhase::Forming,
            Operation::Join | Operation::Leave | Operation::AddBot | Operation::Start,
        ) => true,
        (
            SessionPhase::Active { paused: false },
            Operation::SubmitCommand
            | Operation::Challenge
            | Operation::Undo
            | Operation::Redo
            | Operation::Pause
            | Operation::Leave
            | Operation::ReplaceWithBot,
        ) => true,
        (
            SessionPhase::Active { paused: true },
            Operation::Resume | Operation::Leave | Operation::ReplaceWithBot,
        ) => true,
        (SessionPhase::Concluded { .. }, Operation::Leave) => true,
        _ => false,
    };
    if allowed {
        Ok(())
    } else {
        Err(GameError::invalid_transition(phase.name(), op.name()))
    }
}

/// Transition Forming → Active: build and shuffle the draw pile, deal the
/// starting hands, seat everyone in the turn ring, pick a random starting
/// participant, and flip a non-wild opening discard.
pub fn start(state: &mut GameState, seed: u64) -> Result<GameEvent, GameError> {
    permits(state.phase, Operation::Start)?;

    let count = state.participants.len();
    if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&count) {
        return Err(GameError::EmptyRoomOnStart { count });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut draw_pile = full_deck();
    draw_pile.shuffle(&mut rng);

    deal_hands(&mut draw_pile, &mut state.participants, &state.rules)?;
    let top_card = flip_starting_card(&mut draw_pile)?;

    for participant in &state.participants {
        state.order.add(participant.id);
    }
    let starting_participant = state.participants[rng.gen_range(0..count)].id;
    state.order.set_current(starting_participant)?;

    state.draw_pile = draw_pile;
    state.discard_pile = vec![top_card];
    state.pending_draw = 0;
    state.rng_seed = seed;
    state.started_at = Some(OffsetDateTime::now_utc());
    state.phase = SessionPhase::Active { paused: false };

    Ok(GameEvent::SessionStarted {
        starting_participant,
        top_card,
    })
}
