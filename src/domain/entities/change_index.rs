//! Change index
//!
//! The view of a session's baseline that the detector reads and writes
//! during one poll. Borrowing the session state mutably keeps the
//! persistence boundary explicit: whatever this view changes is exactly
//! what gets saved afterwards.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ModTime;

use super::{ModTimeIndex, SessionState};

#[derive(Debug)]
pub struct ChangeIndex<'a> {
    state: &'a mut SessionState,
}

impl<'a> ChangeIndex<'a> {
    pub fn new(state: &'a mut SessionState) -> Self {
        Self { state }
    }

    pub fn has_index(&self) -> bool {
        self.state.has_index
    }

    pub fn mark_indexed(&mut self) {
        self.state.has_index = true;
    }

    pub fn get(&self, path: &Path) -> Option<ModTime> {
        self.state.mod_times.get(path)
    }

    pub fn set(&mut self, path: PathBuf, mod_time: ModTime) {
        self.state.mod_times.insert(path, mod_time);
    }

    pub fn len(&self) -> usize {
        self.state.mod_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.mod_times.is_empty()
    }

    pub fn snapshot(&self) -> ModTimeIndex {
        self.state.mod_times.clone()
    }

    /// Forget the baseline and the indexed flag
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
