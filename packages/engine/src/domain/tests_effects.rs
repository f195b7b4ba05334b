use crate::domain::cards_types::{Card, CardColor};
use crate::domain::effects::resolve_effect;
use crate::domain::participant::{Participant, ParticipantId};
use crate::domain::rules::HouseRules;
use crate::domain::state::{GameState, SessionPhase};

fn active_state(n: usize) -> (GameState, Vec<ParticipantId>) {
    let mut state = GameState::new(HouseRules::default());
    for i in 0..n {
        state.participants.push(Participant::human(format!("p{i}")));
    }
    let ids: Vec<ParticipantId> = state.participants.iter().map(|p| p.id).collect();
    for &id in &ids {
        state.order.add(id);
    }
    state.phase = SessionPhase::Active { paused: false };
    (state, ids)
}

#[test]
fn numbered_card_has_no_effect() {
    let (mut state, ids) = active_state(3);
    let result = resolve_effect(&mut state, Card::number(CardColor::Red, 5)).unwrap();
    assert_eq!(result, Default::default());
    assert_eq!(state.order.current(), Some(ids[0]));
    assert_eq!(state.pending_draw, 0);
}

#[test]
fn skip_positions_past_the_next_participant() {
    let (mut state, ids) = active_state(4);
    let result = resolve_effect(&mut state, Card::skip(CardColor::Red)).unwrap();
    assert_eq!(result.skipped, Some(ids[1]));
    assert!(result.already_positioned);
    assert_eq!(state.order.current(), Some(ids[2]));
}

#[test]
fn reverse_flips_direction_and_keeps_current() {
    let (mut state, ids) = active_state(3);
    let result = resolve_effect(&mut state, Card::reverse(CardColor::Blue)).unwrap();
    assert!(result.reversed);
    assert!(!result.already_positioned);
    assert!(!state.order.clockwise());
    assert_eq!(state.order.current(), Some(ids[0]));
    // The caller's advance now retreats in the original sense.
    state.order.advance();
    assert_eq!(state.order.current(), Some(ids[2]));
}

#[test]
fn reverse_with_two_participants_behaves_as_skip() {
    let (mut state, ids) = active_state(2);
    let result = resolve_effect(&mut state, Card::reverse(CardColor::Green)).unwrap();
    assert!(result.reversed);
    assert!(result.already_positioned);
    assert_eq!(result.skipped, Some(ids[1]));
    // Turn retention: the actor plays again.
    assert_eq!(state.order.current(), Some(ids[0]));
}

#[test]
fn draw_effects_accumulate_pending() {
    let (mut state, _) = active_state(3);
    resolve_effect(&mut state, Card::draw_two(CardColor::Red)).unwrap();
    assert_eq!(state.pending_draw, 2);
    resolve_effect(&mut state, Card::draw_two(CardColor::Blue)).unwrap();
    assert_eq!(state.pending_draw, 4);
    resolve_effect(
        &mut state,
        Card::wild_draw_four().with_color(CardColor::Red),
    )
    .unwrap();
    assert_eq!(state.pending_draw, 8);
}

#[test]
fn wild_has_no_order_or_pending_effect() {
    let (mut state, ids) = active_state(3);
    let result = resolve_effect(&mut state, Card::wild().with_color(CardColor::Green)).unwrap();
    assert_eq!(result, Default::default());
    assert_eq!(state.order.current(), Some(ids[0]));
    assert_eq!(state.pending_draw, 0);
}
