//! In-memory session store
//!
//! Sessions live as long as the process. Idle sessions expire lazily, on
//! lookup and whenever any session is saved. There is no background reaper.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::Utc;

use crate::domain::entities::SessionState;
use crate::domain::ports::{SessionStore, SessionStoreError};
use crate::domain::value_objects::SessionId;

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<SessionId, SessionState>>,
    /// Seconds of inactivity before a session is forgotten (0 = never)
    idle_timeout_secs: u64,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(mut self, secs: u64) -> Self {
        self.idle_timeout_secs = secs;
        self
    }

    /// Number of sessions currently held (expired ones included until the next save)
    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, id: &SessionId) -> Result<Option<SessionState>, SessionStoreError> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let expired = match sessions.get(id) {
            Some(state) => state.is_expired(Utc::now(), self.idle_timeout_secs),
            None => return Ok(None),
        };
        if expired {
            sessions.remove(id);
            return Ok(None);
        }
        Ok(sessions.get(id).cloned())
    }

    fn save(&self, id: &SessionId, state: &SessionState) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now();
        sessions.retain(|_, held| !held.is_expired(now, self.idle_timeout_secs));
        sessions.insert(id.clone(), state.clone());
        Ok(())
    }

    fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn id(raw: &str) -> SessionId {
        SessionId::new(raw).unwrap()
    }

    #[test]
    fn save_get_delete() {
        let store = InMemorySessionStore::new();
        let mut state = SessionState::unindexed();
        state.has_index = true;

        assert!(!store.exists(&id("a")).unwrap());
        store.save(&id("a"), &state).unwrap();
        assert_eq!(store.get(&id("a")).unwrap(), Some(state));

        store.delete(&id("a")).unwrap();
        assert_eq!(store.get(&id("a")).unwrap(), None);
    }

    #[test]
    fn deleting_unknown_session_is_ok() {
        let store = InMemorySessionStore::new();
        assert!(store.delete(&id("ghost")).is_ok());
    }

    #[test]
    fn idle_sessions_expire_on_lookup() {
        let store = InMemorySessionStore::new().with_idle_timeout(60);
        let mut state = SessionState::unindexed();
        state.touch(Utc::now() - Duration::seconds(600));
        store.save(&id("old"), &state).unwrap();

        assert_eq!(store.get(&id("old")).unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn saving_sweeps_sessions_of_departed_clients() {
        let store = InMemorySessionStore::new().with_idle_timeout(60);
        let mut idle = SessionState::unindexed();
        idle.touch(Utc::now() - Duration::seconds(3600));
        for n in 0..100 {
            store.save(&id(&format!("gone-{n}")), &idle).unwrap();
        }

        let mut live = SessionState::unindexed();
        live.touch(Utc::now());
        assert_eq!(store.get(&id("fresh")).unwrap(), None);
        store.save(&id("fresh"), &live).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id("fresh")).unwrap(), Some(live));
    }

    #[test]
    fn zero_timeout_keeps_idle_sessions() {
        let store = InMemorySessionStore::new();
        let mut idle = SessionState::unindexed();
        idle.touch(Utc::now() - Duration::days(30));
        store.save(&id("a"), &idle).unwrap();
        store.save(&id("b"), &idle).unwrap();

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn sessions_are_independent() {
        let store = InMemorySessionStore::new();
        let mut indexed = SessionState::unindexed();
        indexed.has_index = true;
        store.save(&id("a"), &indexed).unwrap();
        store.save(&id("b"), &SessionState::unindexed()).unwrap();

        assert!(store.get(&id("a")).unwrap().unwrap().has_index);
        assert!(!store.get(&id("b")).unwrap().unwrap().has_index);
    }
}
