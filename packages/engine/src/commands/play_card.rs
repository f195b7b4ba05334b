//! The play-card command: legality checks, effect resolution, win detection.

use time::OffsetDateTime;

use super::{conclude, ensure_active, ensure_current, Command, CommandOutcome, TurnSnapshot};
use crate::domain::cards_logic::is_legal_play;
use crate::domain::cards_types::{Card, CardColor};
use crate::domain::effects::resolve_effect;
use crate::domain::state::GameState;
use crate::domain::ParticipantId;
use crate::errors::GameError;
use crate::events::GameEvent;

#[derive(Debug)]
pub struct PlayCard {
    actor: ParticipantId,
    card: Card,
    chosen_color: Option<CardColor>,
    timestamp: OffsetDateTime,
    undo: Option<PlayUndo>,
}

#[derive(Debug, Clone)]
struct PlayUndo {
    turn: TurnSnapshot,
    hand_index: usize,
}

impl PlayCard {
    pub fn new(actor: ParticipantId, card: Card, chosen_color: Option<CardColor>) -> Self {
        Self {
            actor,
            card,
            chosen_color,
            timestamp: OffsetDateTime::now_utc(),
            undo: None,
        }
    }

    /// The card as it sits in the hand: wild color unresolved.
    fn held_card(&self) -> Card {
        self.card.unresolved()
    }

    /// The card as it lands on the discard pile: wild color resolved.
    fn resolved_card(&self) -> Card {
        match self.chosen_color {
            Some(color) if self.card.is_wild() => self.card.with_color(color),
            _ => self.held_card(),
        }
    }
}

impl Command for PlayCard {
    fn actor(&self) -> ParticipantId {
        self.actor
    }

    fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    fn describe(&self) -> String {
        format!("play {}", self.resolved_card())
    }

    fn validate(&self, state: &GameState) -> Result<(), GameError> {
        ensure_active(state, "play card")?;
        ensure_current(state, self.actor)?;

        let held = self.held_card();
        let participant = state.participant(self.actor)?;
        if participant.card_position(held).is_none() {
            return Err(GameError::CardNotInHand {
                card: held.to_string(),
            });
        }

        match (held.is_wild(), self.chosen_color) {
            (true, None) => {
                return Err(GameError::invalid_color("wild play requires a color choice"))
            }
            (true, Some(color)) if !color.is_concrete() => {
                return Err(GameError::invalid_color("wild cannot resolve to wild"))
            }
            (false, Some(_)) => {
                return Err(GameError::invalid_color(
                    "color choice is only valid for wild plays",
                ))
            }
            _ => {}
        }

        let top = state.require_top_discard()?;
        if !is_legal_play(held, top, state.pending_draw, &state.rules) {
            if state.pending_draw > 0 {
                return Err(GameError::MustResolvePendingDraw {
                    pending: state.pending_draw,
                });
            }
            return Err(GameError::IllegalPlay {
                card: held.to_string(),
                top: top.to_string(),
            });
        }
        Ok(())
    }

    fn execute(&mut self, state: &mut GameState) -> Result<CommandOutcome, GameError> {
        let turn = TurnSnapshot::capture(state, self.actor)?;
        let held = self.held_card();
        let resolved = self.resolved_card();

        let participant = state.participant_mut(self.actor)?;
        let hand_index = participant
            .card_position(held)
            .ok_or_else(|| GameError::CardNotInHand {
                card: held.to_string(),
            })?;
        participant.hand.remove(hand_index);
        // Playing always voids an earlier declaration; hand size changed.
        participant.declared_last_card = false;
        let hand_now_empty = participant.hand.is_empty();

        state.discard_pile.push(resolved);
        self.undo = Some(PlayUndo { turn, hand_index });

        let mut events = vec![GameEvent::CardPlayed {
            participant: self.actor,
            card: resolved,
        }];
        if held.is_wild() {
            events.push(GameEvent::ColorChosen {
                participant: self.actor,
                color: resolved.color,
            });
        }

        // An empty hand wins immediately; effects are not resolved.
        if hand_now_empty {
            events.push(conclude(state, Some(self.actor)));
            return Ok(CommandOutcome {
                events,
                concluded: true,
            });
        }

        let effect = resolve_effect(state, resolved)?;
        if effect.reversed {
            events.push(GameEvent::DirectionReversed {
                clockwise: state.order.clockwise(),
            });
        }
        if let Some(skipped) = effect.skipped {
            events.push(GameEvent::ParticipantSkipped {
                participant: skipped,
            });
        }
        if !effect.already_positioned {
            state.order.advance();
        }
        events.push(GameEvent::TurnChanged {
            participant: state.require_current()?,
        });

        Ok(CommandOutcome {
            events,
            concluded: false,
        })
    }

    fn undo(&mut self, state: &mut GameState) -> Result<(), GameError> {
        let resolved = self.resolved_card();
        if state.discard_pile.last() != Some(&resolved) {
            return Err(GameError::invariant(format!(
                "discard top does not match undone play {resolved}"
            )));
        }
        let undo = self
            .undo
            .take()
            .ok_or_else(|| GameError::invariant("undo of an unexecuted play command"))?;
        state.discard_pile.pop();

        let held = self.held_card();
        let participant = state.participant_mut(self.actor)?;
        participant.hand.insert(undo.hand_index, held);

        undo.turn.restore(state, self.actor)
    }
}
