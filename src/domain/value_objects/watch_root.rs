//! Watch root value object
//!
//! The directory subtree a poll walks. Resolved once from configuration;
//! a root that does not exist yet is still accepted so that the server can
//! start and report the problem on each poll until it is fixed.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Absolute, normalized directory path that bounds the traversal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WatchRoot(PathBuf);

impl WatchRoot {
    /// Resolve `path` against `base` (when relative) and normalize it.
    ///
    /// Existing paths are canonicalized; missing ones are normalized
    /// lexically so later polls can still name them in errors.
    pub fn resolve(path: &Path, base: &Path) -> Self {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        };
        match joined.canonicalize() {
            Ok(canonical) => Self(canonical),
            Err(_) => Self(normalize_lexically(&joined)),
        }
    }

    /// Wrap a path that is already absolute and normalized
    pub fn from_normalized(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for WatchRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for WatchRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Drop `.` components and fold `..` into their parent without touching the
/// filesystem.
pub(crate) fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
