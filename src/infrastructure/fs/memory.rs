//! In-memory directory tree
//!
//! A `DirectoryLister` whose files and timestamps are set by hand, for
//! exercising the detector without sleeping on filesystem mtime
//! granularity. Children are listed in name order.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::domain::ports::{DirEntries, DirectoryLister, FsError, FsResult};
use crate::domain::value_objects::ModTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Dir,
    File(ModTime),
}

#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RwLock<BTreeMap<PathBuf, Node>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `path` and any missing parents as directories
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut nodes = self.nodes.write().unwrap_or_else(PoisonError::into_inner);
        insert_dirs(&mut nodes, path.as_ref());
    }

    /// Create (or overwrite) a file with an mtime in whole seconds
    pub fn add_file(&self, path: impl AsRef<Path>, mtime_secs: i64) {
        self.set_mod_time(path, ModTime::from_unix_secs(mtime_secs));
    }

    /// Change a file's mtime, creating the file if needed
    pub fn touch(&self, path: impl AsRef<Path>, mtime_secs: i64) {
        self.add_file(path, mtime_secs);
    }

    pub fn set_mod_time(&self, path: impl AsRef<Path>, mod_time: ModTime) {
        let path = path.as_ref();
        let mut nodes = self.nodes.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(parent) = path.parent() {
            insert_dirs(&mut nodes, parent);
        }
        nodes.insert(path.to_path_buf(), Node::File(mod_time));
    }

    /// Remove `path` and everything below it
    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut nodes = self.nodes.write().unwrap_or_else(PoisonError::into_inner);
        nodes.retain(|p, _| !p.starts_with(path));
    }

    fn node(&self, path: &Path) -> Option<Node> {
        let nodes = self.nodes.read().unwrap_or_else(PoisonError::into_inner);
        nodes.get(path).copied()
    }
}

fn insert_dirs(nodes: &mut BTreeMap<PathBuf, Node>, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
    }
}

impl DirectoryLister for MemoryFs {
    fn list_entries(&self, dir: &Path) -> FsResult<DirEntries> {
        match self.node(dir) {
            None => return Err(FsError::NotFound(dir.to_path_buf())),
            Some(Node::File(_)) => return Err(FsError::NotADirectory(dir.to_path_buf())),
            Some(Node::Dir) => {}
        }

        let nodes = self.nodes.read().unwrap_or_else(PoisonError::into_inner);
        let mut entries = DirEntries::default();
        for (path, node) in nodes.iter() {
            if path.parent() != Some(dir) {
                continue;
            }
            let Some(name) = path.file_name() else {
                continue;
            };
            let name = name.to_string_lossy().into_owned();
            match node {
                Node::Dir => entries.directories.push(name),
                Node::File(_) => entries.files.push(name),
            }
        }
        Ok(entries)
    }

    fn stat_mod_time(&self, file: &Path) -> FsResult<ModTime> {
        match self.node(file) {
            Some(Node::File(mod_time)) => Ok(mod_time),
            Some(Node::Dir) => Err(FsError::Io {
                path: file.to_path_buf(),
                source: std::io::Error::other("is a directory"),
            }),
            None => Err(FsError::NotFound(file.to_path_buf())),
        }
    }

    fn is_directory(&self, path: &Path) -> bool {
        matches!(self.node(path), Some(Node::Dir))
    }

    fn exists(&self, path: &Path) -> bool {
        self.node(path).is_some()
    }
}
