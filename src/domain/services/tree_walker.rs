//! Tree walker service
//!
//! Enumerates `(file, mtime)` pairs under a root, depth-first and
//! pre-order: the files of a directory come before anything inside its
//! subdirectories. Order within a directory is whatever the lister returns.

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::{DirEntries, DirectoryLister, FsError};
use crate::domain::value_objects::{EntryKind, ModTime};
use crate::error::{LivepollError, LivepollResult};

use super::PathFilter;

/// Counters for one walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Files handed to the visitor
    pub files: usize,
    /// Directories listed (root included)
    pub directories: usize,
    /// Entries that vanished or could not be read mid-walk
    pub skipped: usize,
    /// The visitor asked to stop before the walk finished
    pub stopped_early: bool,
}

/// Walks a directory tree through a `DirectoryLister`, honoring a `PathFilter`
pub struct TreeWalker<'a, L: DirectoryLister + ?Sized> {
    lister: &'a L,
    filter: &'a PathFilter,
}

impl<'a, L: DirectoryLister + ?Sized> TreeWalker<'a, L> {
    pub fn new(lister: &'a L, filter: &'a PathFilter) -> Self {
        Self { lister, filter }
    }

    /// Collect every non-ignored file under `root` with its mtime.
    pub fn walk(&self, root: &Path) -> LivepollResult<Vec<(PathBuf, ModTime)>> {
        let mut pairs = Vec::new();
        self.walk_with(root, |path, mod_time| {
            pairs.push((path, mod_time));
            ControlFlow::Continue(())
        })?;
        Ok(pairs)
    }

    /// Hand each non-ignored file under `root` to `visit`, stopping as soon
    /// as it returns `ControlFlow::Break`.
    ///
    /// Fails only when `root` itself is missing, not a directory, or cannot
    /// be listed. Anything that goes wrong below the root is skipped.
    pub fn walk_with<F>(&self, root: &Path, mut visit: F) -> LivepollResult<WalkStats>
    where
        F: FnMut(PathBuf, ModTime) -> ControlFlow<()>,
    {
        if !self.lister.exists(root) {
            return Err(LivepollError::WatchRootNotFound {
                path: root.to_path_buf(),
            });
        }
        if !self.lister.is_directory(root) {
            return Err(LivepollError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let entries = self.lister.list_entries(root).map_err(|e| root_error(root, e))?;

        let mut stats = WalkStats::default();
        if self
            .visit_entries(root, entries, &mut visit, &mut stats)
            .is_break()
        {
            stats.stopped_early = true;
        }

        debug!(
            root = %root.display(),
            files = stats.files,
            directories = stats.directories,
            skipped = stats.skipped,
            stopped_early = stats.stopped_early,
            "walk finished"
        );
        Ok(stats)
    }

    fn visit_dir<F>(&self, dir: &Path, visit: &mut F, stats: &mut WalkStats) -> ControlFlow<()>
    where
        F: FnMut(PathBuf, ModTime) -> ControlFlow<()>,
    {
        match self.lister.list_entries(dir) {
            Ok(entries) => self.visit_entries(dir, entries, visit, stats),
            Err(err) => {
                debug!(dir = %dir.display(), error = %err, "skipping unreadable directory");
                stats.skipped += 1;
                ControlFlow::Continue(())
            }
        }
    }

    fn visit_entries<F>(
        &self,
        dir: &Path,
        entries: DirEntries,
        visit: &mut F,
        stats: &mut WalkStats,
    ) -> ControlFlow<()>
    where
        F: FnMut(PathBuf, ModTime) -> ControlFlow<()>,
    {
        stats.directories += 1;

        for name in entries.files {
            let path = dir.join(name);
            if self.filter.is_ignored(&path, EntryKind::File) {
                continue;
            }
            let mod_time = match self.lister.stat_mod_time(&path) {
                Ok(mod_time) => mod_time,
                Err(err) => {
                    // Deleted between listing and stat; treat as absent.
                    debug!(file = %path.display(), error = %err, "skipping vanished file");
                    stats.skipped += 1;
                    continue;
                }
            };
            stats.files += 1;
            visit(path, mod_time)?;
        }

        for name in entries.directories {
            let path = dir.join(name);
            if self.filter.is_ignored(&path, EntryKind::Directory) {
                continue;
            }
            self.visit_dir(&path, visit, stats)?;
        }

        ControlFlow::Continue(())
    }
}

fn root_error(root: &Path, err: FsError) -> LivepollError {
    match err {
        FsError::NotFound(_) => LivepollError::WatchRootNotFound {
            path: root.to_path_buf(),
        },
        FsError::NotADirectory(_) => LivepollError::NotADirectory {
            path: root.to_path_buf(),
        },
        FsError::PermissionDenied(_) => LivepollError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("cannot list watch root {}", root.display()),
        )),
        FsError::Io { source, .. } => LivepollError::Io(source),
    }
}
