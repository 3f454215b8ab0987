//! Local File System Implementation
//!
//! Implements the DirectoryLister port for local disk reads.

use std::fs;
use std::path::Path;

use crate::domain::ports::{DirEntries, DirectoryLister, FsError, FsResult};
use crate::domain::value_objects::ModTime;

/// Local file system lister
///
/// Symlinks are followed: a link to a file counts as a file and a link to a
/// directory is descended into. Entries that are neither (sockets, dangling
/// links) are left out of the listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for LocalFs {
    fn list_entries(&self, dir: &Path) -> FsResult<DirEntries> {
        let read_dir = fs::read_dir(dir).map_err(|e| FsError::from_io(dir, e))?;

        let mut entries = DirEntries::default();
        for entry in read_dir.flatten() {
            let path = entry.path();
            // `fs::metadata` follows symlinks, unlike `DirEntry::metadata`.
            let Ok(metadata) = fs::metadata(&path) else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            if metadata.is_file() {
                entries.files.push(name);
            } else if metadata.is_dir() {
                entries.directories.push(name);
            }
        }
        // Sorted so walks are reproducible.
        entries.files.sort();
        entries.directories.sort();
        Ok(entries)
    }

    fn stat_mod_time(&self, file: &Path) -> FsResult<ModTime> {
        let metadata = fs::metadata(file).map_err(|e| FsError::from_io(file, e))?;
        let modified = metadata.modified().map_err(|e| FsError::from_io(file, e))?;
        Ok(ModTime::from(modified))
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
