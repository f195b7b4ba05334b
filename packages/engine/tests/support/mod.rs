//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;

use engine::domain::state::{GameState, SessionPhase};
use engine::domain::{Card, HouseRules, Participant, ParticipantId};
use engine::events::{EventSink, GameEvent};
use engine::SessionId;

/// Sink that records every published event for later assertions.
#[derive(Default)]
pub struct CollectingSink {
    events: Mutex<Vec<GameEvent>>,
}

impl CollectingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().clone()
    }

    pub fn count_matching(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.lock().iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for CollectingSink {
    fn publish(&self, _session: &SessionId, event: &GameEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Active-phase state with rigged hands and a chosen discard top, for
/// deterministic command scenarios.
pub fn rigged_state(
    hands: Vec<Vec<Card>>,
    top: Card,
    rules: HouseRules,
) -> (GameState, Vec<ParticipantId>) {
    let mut state = GameState::new(rules);
    for (i, hand) in hands.into_iter().enumerate() {
        let mut participant = Participant::human(format!("p{i}"));
        participant.hand = hand;
        state.participants.push(participant);
    }
    let ids: Vec<ParticipantId> = state.participants.iter().map(|p| p.id).collect();
    for &id in &ids {
        state.order.add(id);
    }
    state.discard_pile = vec![top];
    // A modest stocked pile keeps draw scenarios honest.
    state.draw_pile = engine::domain::dealing::shuffled_deck(99)
        .into_iter()
        .take(20)
        .collect();
    state.phase = SessionPhase::Active { paused: false };
    (state, ids)
}

pub fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    engine::domain::try_parse_cards(tokens).expect("hardcoded valid card tokens")
}
