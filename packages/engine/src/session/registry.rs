//! Concurrent session registry: the single source of truth for which
//! sessions exist.
//!
//! An explicitly constructed, dependency-injected instance with
//! process-wide lifetime; there is no ambient global. Creation goes through
//! the map's entry API, so no two callers can create the same id and a
//! lookup never observes a partially constructed session.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;
use tracing::info;

use super::{Session, SessionId};
use crate::domain::HouseRules;
use crate::errors::GameError;
use crate::events::EventSink;

#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, Arc<Session>>,
}

/// Registry-wide counters for monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub sessions: usize,
    pub active_sessions: usize,
    pub participants: usize,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Create a session under `id`, failing if the id is taken.
    pub fn create(
        &self,
        id: SessionId,
        rules: HouseRules,
        sink: Arc<dyn EventSink>,
    ) -> Result<Arc<Session>, GameError> {
        match self.sessions.entry(id.clone()) {
            Entry::Occupied(_) => Err(GameError::DuplicateSession { id: id.to_string() }),
            Entry::Vacant(vacant) => {
                let session = Arc::new(Session::new(id.clone(), rules, sink));
                vacant.insert(Arc::clone(&session));
                info!(session = %id, "session registered");
                Ok(session)
            }
        }
    }

    pub fn get(&self, id: &SessionId) -> Result<Arc<Session>, GameError> {
        self.sessions
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| GameError::SessionNotFound { id: id.to_string() })
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    /// Remove and return a session.
    pub fn remove(&self, id: &SessionId) -> Result<Arc<Session>, GameError> {
        self.sessions
            .remove(id)
            .map(|(_, session)| {
                info!(session = %id, "session removed");
                session
            })
            .ok_or_else(|| GameError::SessionNotFound { id: id.to_string() })
    }

    /// Evict concluded and abandoned-empty sessions. Returns how many were
    /// removed.
    pub fn remove_finished(&self) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| !(session.phase().is_concluded() || session.is_empty()));
        let removed = before - self.sessions.len();
        if removed > 0 {
            info!(removed, "cleaned up finished sessions");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn stats(&self) -> RegistryStats {
        let mut active_sessions = 0;
        let mut participants = 0;
        for entry in self.sessions.iter() {
            let session = entry.value();
            if session.phase().is_active() {
                active_sessions += 1;
            }
            participants += session.participant_count();
        }
        RegistryStats {
            sessions: self.sessions.len(),
            active_sessions,
            participants,
        }
    }
}
