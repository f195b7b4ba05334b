//! One complete, isolated game instance from start to conclusion.
//!
//! A session is the unit of concurrency isolation: every mutating operation
//! runs under its own mutex, held for one validate+execute+notify cycle.
//! Cross-session operations never block on each other; the registry provides
//! concurrent lookup without external locking.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ai::{create_strategy, Decision, DecisionStrategy, DecisionView};
use crate::commands::{
    conclude, reshuffle_from_discard, Command, CommandHistory, DeclareLastCard, DrawCard,
    HistoryEntry, PlayCard,
};
use crate::domain::snapshot::{personal_snapshot, snapshot, PersonalSnapshot, SessionSnapshot};
use crate::domain::state::{GameState, SessionPhase};
use crate::domain::{Card, CardColor, Controller, HouseRules, Participant, ParticipantId};
use crate::errors::GameError;
use crate::events::{EventSink, GameEvent};
use crate::utils::join_code::generate_join_code;

pub mod lifecycle;
pub mod registry;

pub use registry::{RegistryStats, SessionRegistry};

use lifecycle::Operation;

/// Runaway guard for the bot loop; far above any real game length.
const MAX_BOT_MOVES: usize = 10_000;

/// Identifier a transport uses to address a session (room code or similar).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh join-code-style identifier.
    pub fn generate() -> Self {
        Self(generate_join_code())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A participant-initiated intent, translated by the transport layer into
/// the matching command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Play {
        participant: ParticipantId,
        card: Card,
        chosen_color: Option<CardColor>,
    },
    Draw {
        participant: ParticipantId,
    },
    DeclareLastCard {
        participant: ParticipantId,
    },
}

struct SessionInner {
    state: GameState,
    history: CommandHistory,
    strategies: HashMap<ParticipantId, Box<dyn DecisionStrategy>>,
}

/// The authoritative engine instance for one game.
pub struct Session {
    id: SessionId,
    sink: Arc<dyn EventSink>,
    inner: Mutex<SessionInner>,
}

impl Session {
    pub fn new(id: SessionId, rules: HouseRules, sink: Arc<dyn EventSink>) -> Self {
        let history = CommandHistory::new(rules.max_history);
        Self {
            id,
            sink,
            inner: Mutex::new(SessionInner {
                state: GameState::new(rules),
                history,
                strategies: HashMap::new(),
            }),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.inner.lock().state.phase
    }

    pub fn participant_count(&self) -> usize {
        self.inner.lock().state.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participant_count() == 0
    }

    /// Add a human participant while forming.
    pub fn join(&self, name: impl Into<String>) -> Result<ParticipantId, GameError> {
        let mut inner = self.inner.lock();
        lifecycle::permits(inner.state.phase, Operation::Join)?;
        self.ensure_seat_available(&inner)?;

        let participant = Participant::human(name);
        let id = participant.id;
        let display_name = participant.name.clone();
        inner.state.participants.push(participant);
        info!(session = %self.id, participant = %id, "participant joined");
        self.sink.publish(
            &self.id,
            &GameEvent::ParticipantJoined {
                participant: id,
                name: display_name,
            },
        );
        Ok(id)
    }

    /// Add a bot participant while forming.
    pub fn add_bot(
        &self,
        name: impl Into<String>,
        strategy_name: &str,
        seed: Option<u64>,
    ) -> Result<ParticipantId, GameError> {
        let mut inner = self.inner.lock();
        lifecycle::permits(inner.state.phase, Operation::AddBot)?;
        self.ensure_seat_available(&inner)?;

        let strategy = create_strategy(strategy_name, seed)?;
        let participant = Participant::bot(name, strategy_name);
        let id = participant.id;
        let display_name = participant.name.clone();
        inner.state.participants.push(participant);
        inner.strategies.insert(id, strategy);
        info!(session = %self.id, participant = %id, strategy = strategy_name, "bot added");
        self.sink.publish(
            &self.id,
            &GameEvent::ParticipantJoined {
                participant: id,
                name: display_name,
            },
        );
        Ok(id)
    }

    /// Remove a participant in any phase. While active this is the
    /// abandonment path: the leaver's cards return to the bottom of the draw
    /// pile, and a session reduced to one participant concludes with that
    /// participant as winner.
    pub fn leave(&self, id: ParticipantId) -> Result<(), GameError> {
        let mut inner = self.inner.lock();
        lifecycle::permits(inner.state.phase, Operation::Leave)?;
        // Fail before mutating anything if the id is unknown.
        inner.state.participant(id)?;

        let was_active = inner.state.phase.is_active();
        let current_before = inner.state.order.current();

        // The sequencer tracks exactly the participant list from start
        // onward; keep the two aligned in every phase.
        if inner.state.order.contains(id) {
            inner.state.order.remove(id)?;
        }
        let idx = inner
            .state
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| GameError::UnknownParticipant { id: id.to_string() })?;
        let removed = inner.state.participants.remove(idx);
        inner.strategies.remove(&id);
        // Keep abandoned cards in circulation for future reshuffles.
        for card in removed.hand {
            inner.state.draw_pile.insert(0, card.unresolved());
        }

        info!(session = %self.id, participant = %id, "participant left");
        self.sink
            .publish(&self.id, &GameEvent::ParticipantLeft { participant: id });

        if was_active {
            if inner.state.participants.len() == 1 {
                let winner = inner.state.participants[0].id;
                let event = conclude(&mut inner.state, Some(winner));
                info!(session = %self.id, %winner, "session concluded by abandonment");
                self.sink.publish(&self.id, &event);
            } else if inner.state.order.current() != current_before {
                if let Some(current) = inner.state.order.current() {
                    self.sink
                        .publish(&self.id, &GameEvent::TurnChanged { participant: current });
                }
            }
        }
        Ok(())
    }

    /// Transition Forming → Active. `seed` drives the shuffle and starting
    /// seat; omit it outside tests and simulations.
    pub fn start(&self, seed: Option<u64>) -> Result<(), GameError> {
        let mut inner = self.inner.lock();
        let seed = seed.unwrap_or_else(rand::random);
        let event = lifecycle::start(&mut inner.state, seed)?;
        info!(session = %self.id, seed, "session started");
        self.sink.publish(&self.id, &event);
        if let Some(current) = inner.state.order.current() {
            self.sink
                .publish(&self.id, &GameEvent::TurnChanged { participant: current });
        }
        Ok(())
    }

    /// Route a player intent through the state machine, the matching
    /// command's validate/execute, and the event sink.
    pub fn submit(&self, action: PlayerAction) -> Result<(), GameError> {
        let mut inner = self.inner.lock();
        self.apply(&mut inner, action)
    }

    /// Undo the most recent command. Only permitted while active: a
    /// concluded session is terminal and is never re-entered.
    pub fn undo(&self) -> Result<(), GameError> {
        let mut inner = self.inner.lock();
        lifecycle::permits(inner.state.phase, Operation::Undo)?;
        let inner = &mut *inner;
        let description = inner.history.undo(&mut inner.state)?;
        debug!(session = %self.id, %description, "command undone");
        self.sink
            .publish(&self.id, &GameEvent::ActionUndone { description });
        Ok(())
    }

    /// Re-apply the head of the undone tail, re-validating it first.
    pub fn redo(&self) -> Result<(), GameError> {
        let mut inner = self.inner.lock();
        lifecycle::permits(inner.state.phase, Operation::Redo)?;
        let inner = &mut *inner;
        let (description, outcome) = inner.history.redo(&mut inner.state)?;
        debug!(session = %self.id, %description, "command redone");
        self.sink
            .publish(&self.id, &GameEvent::ActionRedone { description });
        for event in &outcome.events {
            self.sink.publish(&self.id, event);
        }
        Ok(())
    }

    pub fn pause(&self) -> Result<(), GameError> {
        let mut inner = self.inner.lock();
        lifecycle::permits(inner.state.phase, Operation::Pause)?;
        inner.state.phase = SessionPhase::Active { paused: true };
        self.sink.publish(&self.id, &GameEvent::SessionPaused);
        Ok(())
    }

    pub fn resume(&self) -> Result<(), GameError> {
        let mut inner = self.inner.lock();
        lifecycle::permits(inner.state.phase, Operation::Resume)?;
        inner.state.phase = SessionPhase::Active { paused: false };
        self.sink.publish(&self.id, &GameEvent::SessionResumed);
        Ok(())
    }

    /// Catch a participant holding exactly one undeclared card. A direct
    /// session check, not a command: it never enters the history.
    pub fn challenge(
        &self,
        challenger: ParticipantId,
        target: ParticipantId,
    ) -> Result<(), GameError> {
        let mut inner = self.inner.lock();
        lifecycle::permits(inner.state.phase, Operation::Challenge)?;
        inner.state.participant(challenger)?;
        if challenger == target {
            return Err(GameError::invalid_declaration(
                "cannot challenge your own declaration",
            ));
        }

        let caught = {
            let t = inner.state.participant(target)?;
            t.hand_size() == 1 && !t.declared_last_card
        };
        if !caught {
            return Err(GameError::invalid_declaration(
                "challenge does not catch anything",
            ));
        }

        let penalty = inner.state.rules.declaration_penalty;
        draw_into_hand(&mut inner.state, target, penalty)?;
        info!(session = %self.id, %target, penalty, "declaration penalty applied");
        self.sink.publish(
            &self.id,
            &GameEvent::DeclarationPenaltyApplied {
                participant: target,
                challenger,
                penalty,
            },
        );
        Ok(())
    }

    /// Hand a seat over to a bot, preserving its hand and turn position.
    /// Atomic with respect to other commands on this session.
    pub fn replace_with_bot(
        &self,
        id: ParticipantId,
        strategy_name: &str,
        seed: Option<u64>,
    ) -> Result<(), GameError> {
        let mut inner = self.inner.lock();
        lifecycle::permits(inner.state.phase, Operation::ReplaceWithBot)?;
        let strategy = create_strategy(strategy_name, seed)?;
        let participant = inner.state.participant_mut(id)?;
        participant.controller = Controller::Bot {
            strategy: strategy_name.to_string(),
        };
        inner.strategies.insert(id, strategy);
        warn!(session = %self.id, participant = %id, strategy = strategy_name, "participant replaced by bot");
        self.sink.publish(
            &self.id,
            &GameEvent::ParticipantReplacedByBot {
                participant: id,
                strategy: strategy_name.to_string(),
            },
        );
        Ok(())
    }

    /// Drive consecutive bot turns through their strategies until a human is
    /// current, the session leaves the active phase, or nothing is left to
    /// do. Returns the number of commands applied.
    pub fn advance_bots(&self) -> Result<usize, GameError> {
        let mut inner = self.inner.lock();
        let mut moves = 0usize;

        loop {
            if !matches!(inner.state.phase, SessionPhase::Active { paused: false }) {
                break;
            }
            let Some(current) = inner.state.order.current() else {
                break;
            };
            if !inner.strategies.contains_key(&current) {
                break;
            }

            let decision = {
                let state = &inner.state;
                let strategy = inner
                    .strategies
                    .get(&current)
                    .ok_or_else(|| GameError::invariant("bot strategy disappeared mid-loop"))?;
                let participant = state.participant(current)?;
                let top_card = state.require_top_discard()?;
                let opponent_counts: Vec<(ParticipantId, usize)> = state
                    .hand_counts()
                    .into_iter()
                    .filter(|&(id, _)| id != current)
                    .collect();
                let view = DecisionView {
                    hand: &participant.hand,
                    top_card,
                    pending_draw: state.pending_draw,
                    rules: &state.rules,
                    opponent_counts: &opponent_counts,
                };
                strategy.decide(&view)?
            };

            match decision {
                Decision::Draw => {
                    self.apply(&mut inner, PlayerAction::Draw { participant: current })?;
                }
                Decision::Play {
                    card,
                    chosen_color,
                    declare,
                } => {
                    self.apply(
                        &mut inner,
                        PlayerAction::Play {
                            participant: current,
                            card,
                            chosen_color,
                        },
                    )?;
                    let should_declare = declare
                        && inner.state.phase.is_active()
                        && inner.state.participant(current)?.hand_size() == 1;
                    if should_declare {
                        self.apply(
                            &mut inner,
                            PlayerAction::DeclareLastCard {
                                participant: current,
                            },
                        )?;
                    }
                }
            }

            moves += 1;
            if moves > MAX_BOT_MOVES {
                return Err(GameError::invariant("bot loop did not terminate"));
            }
        }
        Ok(moves)
    }

    /// Broadcast-safe view of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        snapshot(&self.inner.lock().state)
    }

    /// View for one participant, including their hand.
    pub fn personal_snapshot(&self, id: ParticipantId) -> Result<PersonalSnapshot, GameError> {
        personal_snapshot(&self.inner.lock().state, id)
    }

    /// Descriptive command log, oldest first.
    pub fn history_log(&self) -> Vec<HistoryEntry> {
        self.inner.lock().history.log()
    }

    fn ensure_seat_available(&self, inner: &SessionInner) -> Result<(), GameError> {
        let capacity = crate::domain::rules::MAX_PARTICIPANTS;
        if inner.state.participants.len() >= capacity {
            return Err(GameError::SessionFull { capacity });
        }
        Ok(())
    }

    /// One serialized validate+execute+notify cycle. The caller holds the
    /// session lock.
    fn apply(&self, inner: &mut SessionInner, action: PlayerAction) -> Result<(), GameError> {
        lifecycle::permits(inner.state.phase, Operation::SubmitCommand)?;

        let mut command: Box<dyn Command> = match action {
            PlayerAction::Play {
                participant,
                card,
                chosen_color,
            } => Box::new(PlayCard::new(participant, card, chosen_color)),
            PlayerAction::Draw { participant } => Box::new(DrawCard::new(participant)),
            PlayerAction::DeclareLastCard { participant } => {
                Box::new(DeclareLastCard::new(participant))
            }
        };

        command.validate(&inner.state)?;
        let outcome = command.execute(&mut inner.state)?;
        debug!(
            session = %self.id,
            actor = %command.actor(),
            action = %command.describe(),
            concluded = outcome.concluded,
            "command applied"
        );
        inner.history.record(command);
        for event in &outcome.events {
            self.sink.publish(&self.id, event);
        }
        Ok(())
    }
}

/// Draw `count` cards into a participant's hand outside the command flow
/// (declaration penalties). Reshuffle-aware, turn-neutral.
fn draw_into_hand(
    state: &mut GameState,
    who: ParticipantId,
    count: u8,
) -> Result<(), GameError> {
    let available = state.draw_pile.len() + state.discard_pile.len().saturating_sub(1);
    if usize::from(count) > available {
        return Err(GameError::invariant(format!(
            "cannot draw {count}: only {available} cards left in play"
        )));
    }
    for _ in 0..count {
        if state.draw_pile.is_empty() {
            reshuffle_from_discard(state)?;
        }
        let card = state
            .draw_pile
            .pop()
            .ok_or_else(|| GameError::invariant("draw pile empty after reshuffle"))?;
        state.participant_mut(who)?.hand.push(card);
    }
    state.participant_mut(who)?.declared_last_card = false;
    Ok(())
}
