//! Path filter service

use std::path::Path;

use crate::domain::value_objects::{EntryKind, IgnoreSet};

/// Decides whether the walk skips a path.
///
/// A path is ignored iff it is a member of the ignore set for its kind.
/// There is no prefix matching: the walk never descends into an ignored
/// directory, so its contents are skipped without being checked.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    ignores: IgnoreSet,
}

impl PathFilter {
    pub fn new(ignores: IgnoreSet) -> Self {
        Self { ignores }
    }

    /// Filter that lets everything through
    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn is_ignored(&self, path: &Path, kind: EntryKind) -> bool {
        self.ignores.contains(path, kind)
    }
}
