//! Special-effect resolution for a just-played card.

use super::cards_types::{Card, CardKind};
use super::participant::ParticipantId;
use super::state::GameState;
use crate::errors::GameError;

/// What a card's effect did to the session, for event emission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EffectResult {
    pub skipped: Option<ParticipantId>,
    pub reversed: bool,
    pub pending_added: u8,
    /// The sequencer already points past the next actor (skip semantics);
    /// the caller must not advance it again.
    pub already_positioned: bool,
}

/// Resolve the played card's effect against the session state, before the
/// turn advances. The card kind set is closed; resolution is a single match.
///
/// The wild color choice is validated and applied by the play command as the
/// card moves onto the discard pile, so only order and pending-draw
/// mutations happen here.
pub fn resolve_effect(state: &mut GameState, card: Card) -> Result<EffectResult, GameError> {
    let mut result = EffectResult::default();

    match card.kind {
        CardKind::Number(_) | CardKind::Wild => {}
        CardKind::Skip => {
            result.skipped = state.order.skip_one();
            result.already_positioned = true;
        }
        CardKind::Reverse => {
            state.order.reverse_direction();
            result.reversed = true;
            // With exactly two active participants a reverse behaves as a
            // skip: the opponent loses their turn and play returns to the
            // actor. Made explicit rather than left to the 2-node topology.
            if state.order.len() == 2 {
                result.skipped = state.order.skip_one();
                result.already_positioned = true;
            }
        }
        CardKind::DrawTwo => {
            result.pending_added = 2;
        }
        CardKind::WildDrawFour => {
            result.pending_added = 4;
        }
    }

    if result.pending_added > 0 {
        state.pending_draw = state
            .pending_draw
            .checked_add(result.pending_added)
            .ok_or_else(|| GameError::invariant("pending draw counter overflow"))?;
    }

    Ok(result)
}
