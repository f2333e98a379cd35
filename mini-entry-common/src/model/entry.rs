use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The ordered files that make up one compiled entry.
///
/// Project-local entries are ordered template, configuration (if present),
/// script. Dependency-package entries are ordered script, template,
/// configuration, style (if present). Downstream bundlers rely on position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryGroup(Vec<PathBuf>);

impl EntryGroup {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.0.push(path.into());
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }
}

impl From<Vec<PathBuf>> for EntryGroup {
    fn from(files: Vec<PathBuf>) -> Self {
        Self(files)
    }
}

/// Entry name to entry group. Later inserts overwrite earlier ones.
pub type EntryMap = BTreeMap<String, EntryGroup>;

/// Result of one resolution run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEntries {
    pub entry: EntryMap,
    /// Every root manifest and configuration file encountered.
    pub json_files: BTreeSet<PathBuf>,
    /// Absolute sub-package root directories, first-seen order.
    pub sub_packages_dir: Vec<PathBuf>,
}

impl ResolvedEntries {
    pub fn get(&self, name: &str) -> Option<&EntryGroup> {
        self.entry.get(name)
    }

    pub fn len(&self) -> usize {
        self.entry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_empty()
    }
}
