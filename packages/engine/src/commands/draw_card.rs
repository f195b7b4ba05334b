//! The draw-card command: voluntary draws and forced-obligation resolution.

use rand::prelude::*;
use tracing::debug;

use time::OffsetDateTime;

use super::{ensure_active, ensure_current, Command, CommandOutcome, TurnSnapshot};
use crate::domain::cards_types::Card;
use crate::domain::state::GameState;
use crate::domain::ParticipantId;
use crate::errors::GameError;
use crate::events::GameEvent;

#[derive(Debug)]
pub struct DrawCard {
    actor: ParticipantId,
    timestamp: OffsetDateTime,
    undo: Option<DrawUndo>,
    reshuffled: bool,
}

#[derive(Debug, Clone)]
struct DrawUndo {
    turn: TurnSnapshot,
    drawn: Vec<Card>,
}

impl DrawCard {
    pub fn new(actor: ParticipantId) -> Self {
        Self {
            actor,
            timestamp: OffsetDateTime::now_utc(),
            undo: None,
            reshuffled: false,
        }
    }
}

/// Turn the discard pile (minus its top) back into the draw pile.
///
/// Resolved wild colors are cleared on the way back; the shuffle is driven
/// by the state's deterministic seed sequence so replays reshuffle
/// identically.
pub(crate) fn reshuffle_from_discard(state: &mut GameState) -> Result<(), GameError> {
    if state.discard_pile.len() < 2 {
        return Err(GameError::invariant(
            "cannot reshuffle: discard pile holds no cards besides its top",
        ));
    }
    let top = state
        .discard_pile
        .pop()
        .ok_or_else(|| GameError::invariant("discard pile unexpectedly empty"))?;
    let mut recycled: Vec<Card> = state.discard_pile.drain(..).map(Card::unresolved).collect();
    state.discard_pile.push(top);

    let seed = state.next_reshuffle_seed();
    let mut rng = StdRng::seed_from_u64(seed);
    recycled.shuffle(&mut rng);
    debug!(recycled = recycled.len(), "reshuffled discard into draw pile");
    state.draw_pile = recycled;
    Ok(())
}

impl Command for DrawCard {
    fn actor(&self) -> ParticipantId {
        self.actor
    }

    fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    fn describe(&self) -> String {
        match &self.undo {
            Some(u) => format!("draw {}", u.drawn.len()),
            None => "draw".to_string(),
        }
    }

    fn validate(&self, state: &GameState) -> Result<(), GameError> {
        ensure_active(state, "draw card")?;
        ensure_current(state, self.actor)?;

        let needed = state.pending_draw.max(1) as usize;
        let available = state.draw_pile.len() + state.discard_pile.len().saturating_sub(1);
        if needed > available {
            return Err(GameError::invariant(format!(
                "cannot draw {needed}: only {available} cards left in play"
            )));
        }
        Ok(())
    }

    fn execute(&mut self, state: &mut GameState) -> Result<CommandOutcome, GameError> {
        let turn = TurnSnapshot::capture(state, self.actor)?;
        let count = state.pending_draw.max(1);

        let mut drawn = Vec::with_capacity(count as usize);
        for _ in 0..count {
            if state.draw_pile.is_empty() {
                reshuffle_from_discard(state)?;
                self.reshuffled = true;
            }
            let card = state
                .draw_pile
                .pop()
                .ok_or_else(|| GameError::invariant("draw pile empty after reshuffle"))?;
            drawn.push(card);
        }

        let participant = state.participant_mut(self.actor)?;
        participant.hand.extend(drawn.iter().copied());
        // The hand grew past one card; any standing declaration is void.
        participant.declared_last_card = false;

        state.pending_draw = 0;
        self.undo = Some(DrawUndo { turn, drawn });

        // Drawing consumes the turn, whether voluntary or forced.
        state.order.advance();
        let events = vec![
            GameEvent::CardsDrawn {
                participant: self.actor,
                count,
            },
            GameEvent::TurnChanged {
                participant: state.require_current()?,
            },
        ];
        Ok(CommandOutcome {
            events,
            concluded: false,
        })
    }

    fn is_reversible(&self) -> bool {
        // A reshuffle destroys the prior discard ordering; that draw cannot
        // be walked back.
        !self.reshuffled
    }

    fn undo(&mut self, state: &mut GameState) -> Result<(), GameError> {
        let undo = self
            .undo
            .take()
            .ok_or_else(|| GameError::invariant("undo of an unexecuted draw command"))?;

        let participant = state.participant_mut(self.actor)?;
        if participant.hand.len() < undo.drawn.len() {
            self.undo = Some(undo);
            return Err(GameError::invariant(
                "hand shorter than the draw being undone",
            ));
        }
        let keep = participant.hand.len() - undo.drawn.len();
        let returned: Vec<Card> = participant.hand.split_off(keep);
        if returned != undo.drawn {
            participant.hand.extend(returned);
            self.undo = Some(undo);
            return Err(GameError::invariant(
                "hand tail does not match the draw being undone",
            ));
        }

        // Return cards so the next draws pop them in the original order.
        for card in undo.drawn.iter().rev() {
            state.draw_pile.push(*card);
        }
        undo.turn.restore(state, self.actor)
    }
}
