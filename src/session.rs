//! Session store: owned board/fleet pairs keyed by session identifier.
//!
//! The engine itself holds no ambient state; callers orchestrating several
//! concurrent games keep each pair single-owner in a store like this and
//! hand values to the engine per call.

use std::collections::HashMap;

use crate::board::Board;
use crate::fleet::Fleet;

/// One player's owned game state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub board: Board,
    pub fleet: Fleet,
}

impl Session {
    pub fn new(board: Board, fleet: Fleet) -> Self {
        Session { board, fleet }
    }
}

/// Mapping from session identifier to owned [`Session`]. A plain value
/// store; no locking, no interior mutability.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    /// Insert or replace the session for `id`, returning the previous one.
    pub fn insert(&mut self, id: &str, session: Session) -> Option<Session> {
        self.sessions.insert(id.to_owned(), session)
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    /// Remove and return the session for `id`.
    pub fn remove(&mut self, id: &str) -> Option<Session> {
        self.sessions.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    /// Iterate registered session identifiers in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sessions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
