//! Change detector
//!
//! One poll cycle over a session's baseline. A session is either
//! unindexed (the poll builds the baseline and reports no change) or
//! indexed (the poll walks again and compares).
//!
//! Comparison rules for an indexed session:
//! - known path, different mtime: record it, report a change, stop walking
//! - known path, same mtime: nothing
//! - unknown path: absorb it into the baseline, not a change
//!
//! After a change the baseline is dropped, so the next poll rebuilds it
//! instead of reporting another file from the same batch of edits. Files
//! that disappear are never reported; their entries stay until that rebuild.

use std::ops::ControlFlow;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::entities::ChangeIndex;
use crate::domain::ports::DirectoryLister;
use crate::domain::value_objects::{PollOutcome, WatchRoot};
use crate::error::LivepollResult;

use super::{PathFilter, TreeWalker};


/// Which branch of the state machine a poll took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionPhase {
    /// No baseline existed; this poll built one
    Baseline,
    /// A baseline existed and was compared against disk
    Compare,
}

/// What one detection pass saw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionReport {
    pub outcome: PollOutcome,
    pub phase: DetectionPhase,
    /// Files visited before the walk finished or stopped
    pub examined: usize,
    /// Files added to the baseline without counting as a change
    pub absorbed: usize,
    /// The file whose mtime moved, when `outcome` is `Change`
    pub changed_path: Option<PathBuf>,
}

/// Runs detection passes for one watch root
pub struct Detector<'a, L: DirectoryLister + ?Sized> {
    root: &'a WatchRoot,
    walker: TreeWalker<'a, L>,
}

impl<'a, L: DirectoryLister + ?Sized> Detector<'a, L> {
    pub fn new(root: &'a WatchRoot, lister: &'a L, filter: &'a PathFilter) -> Self {
        Self {
            root,
            walker: TreeWalker::new(lister, filter),
        }
    }

    /// Advance `index` by one poll.
    ///
    /// A broken watch root fails before anything in `index` is touched.
    pub fn detect(&self, index: &mut ChangeIndex<'_>) -> LivepollResult<DetectionReport> {
        if index.has_index() {
            self.compare(index)
        } else {
            self.build(index)
        }
    }

    fn build(&self, index: &mut ChangeIndex<'_>) -> LivepollResult<DetectionReport> {
        let stats = self.walker.walk_with(self.root.path(), |path, mod_time| {
            index.set(path, mod_time);
            ControlFlow::Continue(())
        })?;
        index.mark_indexed();

        debug!(root = %self.root, files = stats.files, "baseline built");
        Ok(DetectionReport {
            outcome: PollOutcome::NoChange,
            phase: DetectionPhase::Baseline,
            examined: stats.files,
            absorbed: 0,
            changed_path: None,
        })
    }

    fn compare(&self, index: &mut ChangeIndex<'_>) -> LivepollResult<DetectionReport> {
        let mut absorbed = 0;
        let mut changed_path = None;

        let stats = self.walker.walk_with(self.root.path(), |path, mod_time| {
            match index.get(&path) {
                Some(known) if known != mod_time => {
                    index.set(path.clone(), mod_time);
                    changed_path = Some(path);
                    ControlFlow::Break(())
                }
                Some(_) => ControlFlow::Continue(()),
                None => {
                    index.set(path, mod_time);
                    absorbed += 1;
                    ControlFlow::Continue(())
                }
            }
        })?;

        let outcome = match &changed_path {
            Some(path) => {
                info!(root = %self.root, file = %path.display(), "change detected");
                index.reset();
                PollOutcome::Change
            }
            None => {
                debug!(
                    root = %self.root,
                    files = stats.files,
                    absorbed,
                    "no change"
                );
                PollOutcome::NoChange
            }
        };

        Ok(DetectionReport {
            outcome,
            phase: DetectionPhase::Compare,
            examined: stats.files,
            absorbed,
            changed_path,
        })
    }
}
