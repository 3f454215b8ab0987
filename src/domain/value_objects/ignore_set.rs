//! Ignore set value object
//!
//! Two sets of absolute paths that the tree walk skips. Matching is exact
//! membership: an ignored directory `/site/vendor` does not match
//! `/site/vendor2`, and patterns are not supported.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Kind of a directory entry, as far as ignore matching is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

/// Ignored directories and files, resolved once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    dirs: HashSet<PathBuf>,
    files: HashSet<PathBuf>,
}

/// Outcome of resolving configured ignore entries
#[derive(Debug, Default)]
pub struct ResolvedIgnores {
    pub set: IgnoreSet,
    /// Entries that could not be resolved on disk (dropped from the set)
    pub unresolved: Vec<PathBuf>,
}

impl IgnoreSet {
    /// Ignore nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from paths that are already absolute and normalized
    pub fn from_paths(
        dirs: impl IntoIterator<Item = PathBuf>,
        files: impl IntoIterator<Item = PathBuf>,
    ) -> Self {
        Self {
            dirs: dirs.into_iter().collect(),
            files: files.into_iter().collect(),
        }
    }

    /// Resolve configured entries against `root`.
    ///
    /// Relative entries are joined onto `root`; every entry is canonicalized
    /// so it compares equal to the paths the walker produces. Entries that do
    /// not exist are returned in `unresolved`.
    pub fn resolve<D, F>(root: &Path, dirs: D, files: F) -> ResolvedIgnores
    where
        D: IntoIterator,
        D::Item: AsRef<Path>,
        F: IntoIterator,
        F::Item: AsRef<Path>,
    {
        let mut resolved = ResolvedIgnores::default();
        for dir in dirs {
            match canonical_under(root, dir.as_ref()) {
                Some(path) => {
                    resolved.set.dirs.insert(path);
                }
                None => resolved.unresolved.push(root.join(dir.as_ref())),
            }
        }
        for file in files {
            match canonical_under(root, file.as_ref()) {
                Some(path) => {
                    resolved.set.files.insert(path);
                }
                None => resolved.unresolved.push(root.join(file.as_ref())),
            }
        }
        resolved
    }

    /// Add an already absolute, normalized directory
    pub fn insert_dir(&mut self, path: PathBuf) {
        self.dirs.insert(path);
    }

    pub fn contains(&self, path: &Path, kind: EntryKind) -> bool {
        match kind {
            EntryKind::File => self.files.contains(path),
            EntryKind::Directory => self.dirs.contains(path),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}

fn canonical_under(root: &Path, entry: &Path) -> Option<PathBuf> {
    root.join(entry).canonicalize().ok()
}
