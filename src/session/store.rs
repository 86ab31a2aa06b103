//! Session persistence.
//!
//! The machine talks to persistence only through `SessionStore`. The
//! in-memory store keeps each session `bincode`-encoded, the same opaque
//! bytes an external key-value store would hold.

use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;

use super::state::{GameSession, SessionId};
use crate::core::Result;

/// Key-value persistence for sessions, read-your-writes per key.
pub trait SessionStore: Send + Sync {
    fn get(&self, id: &SessionId) -> Result<Option<GameSession>>;

    /// Insert or replace the session stored under `session.id`.
    fn put(&self, session: &GameSession) -> Result<()>;

    /// Remove the session; clearing a missing key is not an error.
    fn clear(&self, id: &SessionId) -> Result<()>;
}

/// Lets a caller keep a handle on the store it gave to its `GuessGame`.
impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn get(&self, id: &SessionId) -> Result<Option<GameSession>> {
        (**self).get(id)
    }

    fn put(&self, session: &GameSession) -> Result<()> {
        (**self).put(session)
    }

    fn clear(&self, id: &SessionId) -> Result<()> {
        (**self).clear(id)
    }
}

/// Process-local session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<FxHashMap<SessionId, Vec<u8>>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, id: &SessionId) -> Result<Option<GameSession>> {
        let sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        match sessions.get(id) {
            Some(bytes) => Ok(Some(bincode::deserialize(bytes)?)),
            None => Ok(None),
        }
    }

    fn put(&self, session: &GameSession) -> Result<()> {
        let bytes = bincode::serialize(session)?;
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.id.clone(), bytes);
        Ok(())
    }

    fn clear(&self, id: &SessionId) -> Result<()> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner).remove(id);
        Ok(())
    }
}
