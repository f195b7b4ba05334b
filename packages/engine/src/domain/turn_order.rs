//! Circular turn ordering with O(1) advance/skip/reverse/remove.
//!
//! The ring is an arena of slots with explicit `next`/`prev` indices instead
//! of reference cycles. Links always describe the clockwise orientation; the
//! direction flag toggles which link "next" means, never the structure.

use super::participant::ParticipantId;
use crate::errors::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    participant: ParticipantId,
    next: usize,
    prev: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSequencer {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    current: Option<usize>,
    clockwise: bool,
    len: usize,
}

impl Default for TurnSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnSequencer {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            current: None,
            clockwise: true,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn current(&self) -> Option<ParticipantId> {
        self.current.map(|i| self.node(i).participant)
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.find(id).is_some()
    }

    /// Append a participant immediately before the current one, so it acts
    /// last in the present rotation.
    pub fn add(&mut self, id: ParticipantId) {
        let idx = self.alloc(id);
        match self.current {
            None => {
                let node = self.node_mut(idx);
                node.next = idx;
                node.prev = idx;
                self.current = Some(idx);
            }
            Some(cur) => {
                let prev = self.node(cur).prev;
                self.node_mut(prev).next = idx;
                {
                    let node = self.node_mut(idx);
                    node.prev = prev;
                    node.next = cur;
                }
                self.node_mut(cur).prev = idx;
            }
        }
        self.len += 1;
    }

    /// Move current one step in the active direction; returns the new
    /// current participant.
    pub fn advance(&mut self) -> Option<ParticipantId> {
        self.current = self.current.map(|i| self.step(i));
        self.current()
    }

    /// Non-mutating lookahead one step in the active direction.
    pub fn peek_next(&self) -> Option<ParticipantId> {
        self.current.map(|i| self.node(self.step(i)).participant)
    }

    /// Flip the direction flag. No relinking happens.
    pub fn reverse_direction(&mut self) {
        self.clockwise = !self.clockwise;
    }

    /// Advance two steps atomically; returns the participant that was
    /// skipped over.
    pub fn skip_one(&mut self) -> Option<ParticipantId> {
        let skipped = self.peek_next()?;
        self.advance();
        self.advance();
        Some(skipped)
    }

    /// Detach a participant, relinking its neighbors. If it was current,
    /// current moves to the next slot in the active direction.
    pub fn remove(&mut self, id: ParticipantId) -> Result<(), GameError> {
        let idx = self.find(id).ok_or_else(|| GameError::UnknownParticipant {
            id: id.to_string(),
        })?;

        if self.len == 1 {
            self.slots[idx] = None;
            self.free.push(idx);
            self.current = None;
            self.len = 0;
            return Ok(());
        }

        let node = *self.node(idx);
        self.node_mut(node.prev).next = node.next;
        self.node_mut(node.next).prev = node.prev;
        if self.current == Some(idx) {
            self.current = Some(self.step(idx));
        }
        self.slots[idx] = None;
        self.free.push(idx);
        self.len -= 1;
        Ok(())
    }

    /// Force current onto a specific participant. Used when restoring a
    /// captured turn position during undo.
    pub fn set_current(&mut self, id: ParticipantId) -> Result<(), GameError> {
        let idx = self.find(id).ok_or_else(|| GameError::UnknownParticipant {
            id: id.to_string(),
        })?;
        self.current = Some(idx);
        Ok(())
    }

    pub fn set_direction(&mut self, clockwise: bool) {
        self.clockwise = clockwise;
    }

    /// Participants in play order starting from current.
    pub fn order_from_current(&self) -> Vec<ParticipantId> {
        let Some(start) = self.current else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(self.len);
        let mut idx = start;
        for _ in 0..self.len {
            out.push(self.node(idx).participant);
            idx = self.step(idx);
        }
        out
    }

    fn step(&self, idx: usize) -> usize {
        let node = self.node(idx);
        if self.clockwise {
            node.next
        } else {
            node.prev
        }
    }

    fn find(&self, id: ParticipantId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|n| n.participant == id))
    }

    fn alloc(&mut self, id: ParticipantId) -> usize {
        let node = Node {
            participant: id,
            next: 0,
            prev: 0,
        };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn node(&self, idx: usize) -> &Node {
        self.slots[idx]
            .as_ref()
            .expect("sequencer links only point at occupied slots")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        self.slots[idx]
            .as_mut()
            .expect("sequencer links only point at occupied slots")
    }
}
