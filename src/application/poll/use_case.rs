//! Poll Use Case implementation

use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, error};

use crate::domain::entities::{ChangeIndex, SessionState};
use crate::domain::ports::{DirectoryLister, SessionStore};
use crate::domain::services::{Detector, PathFilter, TreeWalker};
use crate::domain::value_objects::{ModTime, PollOutcome, SessionId, WatchRoot};
use crate::error::LivepollResult;

use super::SessionLocks;

/// What one poll did, for callers that want more than the wire answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReport {
    pub outcome: PollOutcome,
    /// File whose mtime moved, when a change was reported
    pub changed_path: Option<PathBuf>,
    /// Why the watch root could not be walked, when it could not
    pub root_error: Option<String>,
}

impl PollReport {
    fn no_change() -> Self {
        Self {
            outcome: PollOutcome::NoChange,
            changed_path: None,
            root_error: None,
        }
    }
}

/// Poll Use Case
///
/// Owns the watch configuration and the session store; safe to share
/// between request handlers.
pub struct PollUseCase<L: DirectoryLister, S: SessionStore> {
    root: WatchRoot,
    filter: PathFilter,
    lister: L,
    store: S,
    locks: SessionLocks,
}

impl<L: DirectoryLister, S: SessionStore> PollUseCase<L, S> {
    pub fn new(root: WatchRoot, filter: PathFilter, lister: L, store: S) -> Self {
        Self {
            root,
            filter,
            lister,
            store,
            locks: SessionLocks::new(),
        }
    }

    pub fn root(&self) -> &WatchRoot {
        &self.root
    }

    pub fn filter(&self) -> &PathFilter {
        &self.filter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Walk the watch root the way a baseline poll would, without
    /// touching any session.
    pub fn snapshot(&self) -> LivepollResult<Vec<(PathBuf, ModTime)>> {
        TreeWalker::new(&self.lister, &self.filter).walk(self.root.path())
    }

    /// Answer one poll from `session`.
    pub fn poll(&self, session: &SessionId) -> LivepollResult<PollOutcome> {
        self.poll_report(session).map(|report| report.outcome)
    }

    /// Answer one poll from `session`, keeping the detector's findings.
    ///
    /// A watch root that cannot be walked is logged and answered with
    /// `NoChange`, leaving the session as it was. Only session store
    /// failures are returned as errors.
    pub fn poll_report(&self, session: &SessionId) -> LivepollResult<PollReport> {
        self.locks.with_lock(session, || self.poll_locked(session))
    }

    fn poll_locked(&self, session: &SessionId) -> LivepollResult<PollReport> {
        let mut state = self.store.get(session)?.unwrap_or_else(SessionState::unindexed);

        let detector = Detector::new(&self.root, &self.lister, &self.filter);
        let report = match detector.detect(&mut ChangeIndex::new(&mut state)) {
            Ok(report) => report,
            Err(err) => {
                error!(root = %self.root, error = %err, "cannot walk watch root");
                return Ok(PollReport {
                    root_error: Some(err.to_string()),
                    ..PollReport::no_change()
                });
            }
        };

        if report.outcome.is_change() {
            self.store.delete(session)?;
        } else {
            state.touch(Utc::now());
            self.store.save(session, &state)?;
        }

        debug!(
            session = %session,
            outcome = %report.outcome,
            examined = report.examined,
            "poll answered"
        );
        Ok(PollReport {
            outcome: report.outcome,
            changed_path: report.changed_path,
            root_error: None,
        })
    }
}
