//! SessionStore port
//!
//! Key-value persistence of `SessionState`, one entry per client session.
//! The store owns lifecycle policy (expiry); the poll use case only loads,
//! saves and deletes.

use crate::domain::entities::SessionState;
use crate::domain::value_objects::SessionId;

pub trait SessionStore: Send + Sync {
    /// Load the state of `id`, or `None` when the session is unknown or expired
    fn get(&self, id: &SessionId) -> Result<Option<SessionState>, SessionStoreError>;

    /// Create or replace the state of `id`
    fn save(&self, id: &SessionId, state: &SessionState) -> Result<(), SessionStoreError>;

    /// Remove `id`; removing an unknown session is not an error
    fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError>;

    fn exists(&self, id: &SessionId) -> Result<bool, SessionStoreError> {
        Ok(self.get(id)?.is_some())
    }
}

impl<T: SessionStore + ?Sized> SessionStore for std::sync::Arc<T> {
    fn get(&self, id: &SessionId) -> Result<Option<SessionState>, SessionStoreError> {
        (**self).get(id)
    }

    fn save(&self, id: &SessionId, state: &SessionState) -> Result<(), SessionStoreError> {
        (**self).save(id, state)
    }

    fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        (**self).delete(id)
    }

    fn exists(&self, id: &SessionId) -> Result<bool, SessionStoreError> {
        (**self).exists(id)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionStoreError {
    #[error("session store unavailable: {message}")]
    Unavailable { message: String },

    #[error("failed to serialize session: {message}")]
    Serialization { message: String },

    #[error("session data corrupted for {session}: {message}")]
    Corrupted { session: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_session() {
        let err = SessionStoreError::Corrupted {
            session: "abc".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "session data corrupted for abc: expected value"
        );
    }
}
