//! Deterministic deck construction, shuffling, and the opening deal.

use rand::prelude::*;

use super::cards_types::{Card, CardColor};
use super::participant::Participant;
use super::rules::{HouseRules, MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use crate::errors::GameError;

/// Generate the full 108-card deck in standard order.
///
/// Per color: one 0, two each of 1..=9, two skips, two reverses, two
/// draw-twos. Plus four wilds and four wild-draw-fours.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(108);
    for color in CardColor::CONCRETE {
        deck.push(Card::number(color, 0));
        for value in 1..=9 {
            deck.push(Card::number(color, value));
            deck.push(Card::number(color, value));
        }
        for _ in 0..2 {
            deck.push(Card::skip(color));
            deck.push(Card::reverse(color));
            deck.push(Card::draw_two(color));
        }
    }
    for _ in 0..4 {
        deck.push(Card::wild());
        deck.push(Card::wild_draw_four());
    }
    deck
}

/// Full deck shuffled deterministically from `seed`.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = StdRng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Deal the opening hands off the top of `draw_pile` into each participant.
pub fn deal_hands(
    draw_pile: &mut Vec<Card>,
    participants: &mut [Participant],
    rules: &HouseRules,
) -> Result<(), GameError> {
    let count = participants.len();
    if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&count) {
        return Err(GameError::EmptyRoomOnStart { count });
    }

    let needed = count * rules.starting_hand_size as usize;
    // One more card must remain for the opening flip.
    if draw_pile.len() <= needed {
        return Err(GameError::invariant(format!(
            "draw pile of {} cannot deal {count} hands of {}",
            draw_pile.len(),
            rules.starting_hand_size
        )));
    }

    for _ in 0..rules.starting_hand_size {
        for participant in participants.iter_mut() {
            let card = draw_pile
                .pop()
                .ok_or_else(|| GameError::invariant("draw pile exhausted during deal"))?;
            participant.hand.push(card);
        }
    }
    Ok(())
}

/// Flip the opening discard. Wild kinds cannot open the game: they are cycled
/// to the bottom of the draw pile until a colored card surfaces.
pub fn flip_starting_card(draw_pile: &mut Vec<Card>) -> Result<Card, GameError> {
    for _ in 0..draw_pile.len() {
        let card = draw_pile
            .pop()
            .ok_or_else(|| GameError::invariant("draw pile exhausted before opening flip"))?;
        if card.is_wild() {
            draw_pile.insert(0, card);
        } else {
            return Ok(card);
        }
    }
    Err(GameError::invariant(
        "draw pile holds only wild cards at opening flip",
    ))
}
