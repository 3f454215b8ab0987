//! DirectoryLister port - the few filesystem reads the tree walk needs
//!
//! The walk only ever lists directories and reads modification times, so
//! that is all this port offers.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ModTime;

/// Result type for directory listing operations
pub type FsResult<T> = Result<T, FsError>;

/// Directory listing errors
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Names of the entries of one directory, split by kind.
///
/// Names are bare file names (no `.` or `..`), in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirEntries {
    pub files: Vec<String>,
    pub directories: Vec<String>,
}

/// Read-only directory access used by the tree walk
///
/// Implementations:
/// - `LocalFs` - the real filesystem
/// - `MemoryFs` (tests) - an in-memory tree with settable timestamps
pub trait DirectoryLister: Send + Sync {
    /// List the regular files and subdirectories of `dir`
    fn list_entries(&self, dir: &Path) -> FsResult<DirEntries>;

    /// Modification time of `file`
    fn stat_mod_time(&self, file: &Path) -> FsResult<ModTime>;

    /// Whether `path` exists and is a directory
    fn is_directory(&self, path: &Path) -> bool;

    /// Whether `path` exists at all
    fn exists(&self, path: &Path) -> bool;
}

impl<T: DirectoryLister + ?Sized> DirectoryLister for std::sync::Arc<T> {
    fn list_entries(&self, dir: &Path) -> FsResult<DirEntries> {
        (**self).list_entries(dir)
    }

    fn stat_mod_time(&self, file: &Path) -> FsResult<ModTime> {
        (**self).stat_mod_time(file)
    }

    fn is_directory(&self, path: &Path) -> bool {
        (**self).is_directory(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
