// mini-entry-core/src/resolve/pages.rs
//! Page/entry-group resolution: page and component references to entries.
use mini_entry_common::error::Result;
use mini_entry_common::{EntryGroup, EntryMap, CONFIG_EXT, DEPENDENCY_DIR};
use tracing::{debug, warn};

use super::Traversal;
use crate::package::build_package_entry;
use crate::paths::normalize_reference;
use crate::project_fs::ProjectFs;
use crate::reference::dependency_suffix;

/// A reference ready for entry resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageRef {
    /// Relative to the source root, e.g. `pages/index/index`.
    Project(String),
    /// Relative to the working directory, e.g. `node_modules/vant/button/index`.
    DependencyPackage(String),
}

impl PageRef {
    /// A page path as written in a manifest's `pages`.
    pub fn from_page(page: &str) -> Self {
        let normalized = normalize_reference(page);
        match dependency_suffix(&normalized) {
            Some(inside) => PageRef::DependencyPackage(format!("{DEPENDENCY_DIR}/{inside}")),
            None => PageRef::Project(normalized.trim_start_matches('/').to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PageRef::Project(path) | PageRef::DependencyPackage(path) => path,
        }
    }
}

impl<F: ProjectFs + ?Sized> Traversal<'_, F> {
    /// Turns references into entries.
    ///
    /// Project references yield `[template, configuration?, script]`, the
    /// configuration only when it exists (and it is then recorded for
    /// expansion). Dependency references are delegated to the package entry
    /// builder.
    pub fn resolve_pages(&mut self, refs: &[PageRef]) -> Result<EntryMap> {
        let mut entry = EntryMap::new();
        for page in refs {
            if self.ignore.is_ignored(page.as_str()) {
                continue;
            }
            match page {
                PageRef::DependencyPackage(reference) => {
                    let built = build_package_entry(
                        self.fs,
                        self.paths.cwd(),
                        &self.config.compiled_suffix,
                        reference,
                        &mut self.descriptors,
                    )?;
                    if self.fs.exists(&built.config) {
                        self.record_config(built.config);
                    } else {
                        warn!(
                            "Dependency component '{}' has no configuration file at {}",
                            reference,
                            built.config.display()
                        );
                    }
                    entry.insert(built.name, built.group);
                }
                PageRef::Project(reference) => {
                    let group = self.project_group(reference);
                    debug!("Entry '{}' -> {:?}", reference, group.files());
                    entry.insert(reference.clone(), group);
                }
            }
        }
        Ok(entry)
    }

    fn project_group(&mut self, reference: &str) -> EntryGroup {
        let script = self.paths.script_path(
            self.fs,
            reference,
            self.config.entry_suffix.script(),
            self.config.compiled_suffix.script(),
        );
        let template = self
            .paths
            .with_suffix(reference, self.config.entry_suffix.template());
        let config = self.paths.with_suffix(reference, CONFIG_EXT);

        let mut group = EntryGroup::new();
        group.push(template);
        if self.fs.exists(&config) {
            group.push(config.clone());
            self.record_config(config);
        }
        group.push(script);
        group
    }
}
