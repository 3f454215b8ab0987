//! File-backed session store
//!
//! One JSON document per session under a directory. File names are the
//! SHA-256 of the session id, so client-supplied ids never become paths.
//! Every access takes an advisory lock on a sibling `.lock` file, which
//! lets a running server and the `poll` subcommand share one directory.
//! The lock file is unlinked before it is released, so at rest the
//! directory holds only `.json` documents.
//!
//! Expiry is lazy. A lookup drops its own session once idle, and every
//! save sweeps documents of other sessions that have gone idle.

use std::collections::BTreeSet;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use fs2::FileExt;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::domain::entities::SessionState;
use crate::domain::ports::{SessionStore, SessionStoreError};
use crate::domain::value_objects::SessionId;

pub struct FileSessionStore {
    dir: PathBuf,
    idle_timeout_secs: u64,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            idle_timeout_secs: 0,
        }
    }

    pub fn with_idle_timeout(mut self, secs: u64) -> Self {
        self.idle_timeout_secs = secs;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key(id: &SessionId) -> String {
        format!("{:x}", Sha256::digest(id.as_str().as_bytes()))
    }

    fn session_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn lock_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.lock"))
    }

    fn open_lock(&self, key: &str) -> Result<fs::File, SessionStoreError> {
        fs::create_dir_all(&self.dir).map_err(unavailable)?;
        fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path(key))
            .map_err(unavailable)
    }

    /// Blocks until the lock for `key` is held.
    ///
    /// A holder unlinks the lock file before releasing it, so a waiter may
    /// wake up holding a file that is no longer at the lock path. It then
    /// starts over on the current one.
    fn acquire(&self, key: &str) -> Result<fs::File, SessionStoreError> {
        loop {
            let lock = self.open_lock(key)?;
            lock.lock_exclusive().map_err(unavailable)?;
            if is_current(&lock, &self.lock_path(key)) {
                return Ok(lock);
            }
            let _ = lock.unlock();
        }
    }

    /// Takes the lock for `key` only if nobody else holds it.
    fn try_acquire(&self, key: &str) -> Result<Option<fs::File>, SessionStoreError> {
        let lock = self.open_lock(key)?;
        match lock.try_lock_exclusive() {
            Ok(()) if is_current(&lock, &self.lock_path(key)) => Ok(Some(lock)),
            Ok(()) => {
                let _ = lock.unlock();
                Ok(None)
            }
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => Ok(None),
            Err(e) => Err(unavailable(e)),
        }
    }

    fn release(&self, key: &str, lock: fs::File) {
        if let Err(e) = remove_if_present(&self.lock_path(key)) {
            debug!(lock = %self.lock_path(key).display(), error = %e, "cannot remove session lock");
        }
        let _ = lock.unlock();
    }

    fn read_unlocked(
        &self,
        key: &str,
        session: &str,
    ) -> Result<Option<SessionState>, SessionStoreError> {
        let content = match fs::read_to_string(self.session_path(key)) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(unavailable(e)),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| SessionStoreError::Corrupted {
                session: session.to_string(),
                message: e.to_string(),
            })
    }

    fn write_unlocked(&self, key: &str, state: &SessionState) -> Result<(), SessionStoreError> {
        let content =
            serde_json::to_vec(state).map_err(|e| SessionStoreError::Serialization {
                message: e.to_string(),
            })?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(unavailable)?;
        tmp.write_all(&content).map_err(unavailable)?;
        tmp.persist(self.session_path(key))
            .map_err(|e| unavailable(e.error))?;
        Ok(())
    }

    fn remove_unlocked(&self, key: &str) -> Result<(), SessionStoreError> {
        remove_if_present(&self.session_path(key)).map_err(unavailable)
    }

    /// Removes documents of other sessions that have been idle past the
    /// timeout. Sessions locked by someone else are left for a later sweep.
    fn sweep(&self, keep: &str) {
        if self.idle_timeout_secs == 0 {
            return;
        }
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %self.dir.display(), error = %e, "cannot list session directory");
                return;
            }
        };

        let keys: BTreeSet<String> = entries
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                let key = name
                    .strip_suffix(".json")
                    .or_else(|| name.strip_suffix(".lock"))?;
                Some(key.to_string())
            })
            .filter(|key| key != keep)
            .collect();

        let timeout = Duration::from_secs(self.idle_timeout_secs);
        for key in keys {
            if !self.untouched_for(&key, timeout) {
                continue;
            }
            let lock = match self.try_acquire(&key) {
                Ok(Some(lock)) => lock,
                Ok(None) => continue,
                Err(e) => {
                    debug!(error = %e, "cannot lock idle session");
                    continue;
                }
            };

            let stale = match self.read_unlocked(&key, &key) {
                Ok(Some(state)) => state.is_expired(Utc::now(), self.idle_timeout_secs),
                Ok(None) | Err(SessionStoreError::Corrupted { .. }) => true,
                Err(_) => false,
            };
            if stale {
                match self.remove_unlocked(&key) {
                    Ok(()) => debug!(session = %key, "swept idle session"),
                    Err(e) => debug!(session = %key, error = %e, "cannot sweep idle session"),
                }
            }

            self.release(&key, lock);
        }
    }

    /// Whether neither file of `key` has been written within `timeout`.
    ///
    /// A document is rewritten on every poll, so a recent modification time
    /// rules the session out without parsing it.
    fn untouched_for(&self, key: &str, timeout: Duration) -> bool {
        [self.session_path(key), self.lock_path(key)]
            .iter()
            .filter_map(|path| fs::metadata(path).and_then(|m| m.modified()).ok())
            .all(|modified| modified.elapsed().is_ok_and(|age| age > timeout))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, id: &SessionId) -> Result<Option<SessionState>, SessionStoreError> {
        let key = Self::key(id);
        let lock = self.acquire(&key)?;

        let result = match self.read_unlocked(&key, id.as_str()) {
            Ok(Some(state)) if state.is_expired(Utc::now(), self.idle_timeout_secs) => {
                self.remove_unlocked(&key).map(|()| None)
            }
            Err(SessionStoreError::Corrupted { message, .. }) => {
                warn!(session = %id, error = %message, "discarding unreadable session state");
                self.remove_unlocked(&key).map(|()| None)
            }
            other => other,
        };

        self.release(&key, lock);
        result
    }

    fn save(&self, id: &SessionId, state: &SessionState) -> Result<(), SessionStoreError> {
        let key = Self::key(id);
        let lock = self.acquire(&key)?;

        let result = self.write_unlocked(&key, state);

        self.release(&key, lock);
        if result.is_ok() {
            self.sweep(&key);
        }
        result
    }

    fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        let key = Self::key(id);
        let lock = self.acquire(&key)?;

        let result = self.remove_unlocked(&key);

        self.release(&key, lock);
        result
    }
}

#[cfg(unix)]
fn is_current(lock: &fs::File, path: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (lock.metadata(), fs::metadata(path)) {
        (Ok(held), Ok(on_disk)) => held.dev() == on_disk.dev() && held.ino() == on_disk.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_current(_lock: &fs::File, path: &Path) -> bool {
    path.exists()
}

fn remove_if_present(path: &Path) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

fn unavailable(err: std::io::Error) -> SessionStoreError {
    SessionStoreError::Unavailable {
        message: err.to_string(),
    }
}
