//! Modification time index
//!
//! The baseline a poll compares against. Keys are absolute, normalized
//! file paths exactly as the tree walk produces them.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ModTime;

/// Mapping from file path to last-known modification time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModTimeIndex {
    entries: BTreeMap<PathBuf, ModTime>,
}

impl ModTimeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &Path) -> Option<ModTime> {
        self.entries.get(path).copied()
    }

    /// Record `mod_time` for `path`, returning the previous value if any
    pub fn insert(&mut self, path: PathBuf, mod_time: ModTime) -> Option<ModTime> {
        self.entries.insert(path, mod_time)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PathBuf, ModTime> {
        self.entries.iter()
    }
}

impl FromIterator<(PathBuf, ModTime)> for ModTimeIndex {
    fn from_iter<I: IntoIterator<Item = (PathBuf, ModTime)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ModTimeIndex {
    type Item = (&'a PathBuf, &'a ModTime);
    type IntoIter = btree_map::Iter<'a, PathBuf, ModTime>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
