// mini-entry-core/src/resolve/components.rs
use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use mini_entry_common::error::Result;
use mini_entry_common::{EntryMap, CONFIG_EXT};
use tracing::debug;

use super::pages::PageRef;
use super::Traversal;
use crate::paths::{entry_name, relative_path};
use crate::project_fs::ProjectFs;
use crate::reference::{classify, Reference};

impl<F: ProjectFs + ?Sized> Traversal<'_, F> {
    /// Resolves a `usingComponents` mapping declared by `referrer` (an
    /// absolute manifest or configuration file path).
    ///
    /// References are classified, resolved, and deduplicated on their
    /// resolved path (first wins). Existing sibling configuration files are
    /// recorded for expansion.
    pub fn resolve_components(
        &mut self,
        referrer: &Path,
        components: &IndexMap<String, String>,
    ) -> Result<EntryMap> {
        if referrer.as_os_str().is_empty() {
            return Ok(EntryMap::new());
        }

        let mut seen = HashSet::new();
        let mut refs = Vec::new();
        for (tag, raw) in components.iter() {
            let resolved = self.resolve_component(referrer, raw);
            debug!("Component <{}> '{}' -> {:?}", tag, raw, resolved);
            if !seen.insert(resolved.as_str().to_string()) {
                continue;
            }
            if self.ignore.is_ignored(resolved.as_str()) {
                continue;
            }
            if let PageRef::Project(path) = &resolved {
                let config = self.paths.with_suffix(path, CONFIG_EXT);
                if self.fs.exists(&config) {
                    self.record_config(config);
                }
            }
            refs.push(resolved);
        }

        self.resolve_pages(&refs)
    }

    /// Classifies one raw reference and resolves it to a source-root
    /// relative project path or a cwd-relative dependency path.
    pub fn resolve_component(&self, referrer: &Path, raw: &str) -> PageRef {
        let dependency_dir = self.paths.dependency_dir();
        let reference = classify(raw, |name| self.fs.is_dir(&dependency_dir.join(name)));

        match reference {
            Reference::RootRelative(path) => PageRef::Project(path),
            Reference::DependencyPackage(path) => {
                let absolute = self
                    .paths
                    .resolve_with_base(self.fs, referrer, &path, true);
                PageRef::DependencyPackage(entry_name(&relative_path(self.paths.cwd(), &absolute)))
            }
            Reference::ReferrerRelative(path) => {
                let absolute = self
                    .paths
                    .resolve_with_base(self.fs, referrer, &path, false);
                if self.paths.is_in_dependency_dir(&absolute) {
                    PageRef::DependencyPackage(entry_name(&relative_path(
                        self.paths.cwd(),
                        &absolute,
                    )))
                } else {
                    PageRef::Project(entry_name(&relative_path(
                        &self.paths.source_dir(),
                        &absolute,
                    )))
                }
            }
        }
    }
}
