// mini-entry-core/src/resolve/mod.rs
//! Graph traversal over manifests and component configuration files.
//!
//! A [`Traversal`] owns all per-run state: the queue of discovered
//! configuration files, the visited set, the descriptor cache and the
//! accumulating entry map. It is created for one run and consumed by it, so
//! two runs never share dedup state.
//!
//! The driver drains a FIFO of root manifests. After each root it drains the
//! FIFO of configuration files discovered so far; expanding one may enqueue
//! more. A configuration file is claimed in the visited set before it is
//! read, so reference cycles terminate and nothing is expanded twice.

pub mod components;
pub mod manifest;
pub mod pages;

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use mini_entry_common::error::Result;
use mini_entry_common::{EntryConfig, EntryGroup, EntryMap, ResolvedEntries};
use tracing::{debug, warn};

use crate::ignore::IgnoreFilter;
use crate::package::DescriptorCache;
use crate::paths::{entry_name, relative_path, ProjectPaths};
use crate::project_fs::ProjectFs;

pub use manifest::ManifestEntries;
pub use pages::PageRef;

pub struct Traversal<'a, F: ProjectFs + ?Sized> {
    fs: &'a F,
    config: &'a EntryConfig,
    paths: ProjectPaths,
    ignore: IgnoreFilter,
    descriptors: DescriptorCache,
    /// Discovered, not yet expanded configuration files.
    pending: VecDeque<PathBuf>,
    /// Every configuration file discovered so far.
    discovered: BTreeSet<PathBuf>,
    /// Configuration files already claimed for expansion.
    visited: HashSet<PathBuf>,
    roots: BTreeSet<PathBuf>,
    entries: EntryMap,
    sub_package_dirs: Vec<PathBuf>,
}

impl<'a, F: ProjectFs + ?Sized> Traversal<'a, F> {
    pub fn new(fs: &'a F, config: &'a EntryConfig, cwd: &Path) -> Result<Self> {
        let paths = ProjectPaths::new(cwd, config);
        debug!(
            "Traversal rooted at {} (source root '{}')",
            paths.cwd().display(),
            paths.source_root().display()
        );
        Ok(Self {
            fs,
            config,
            paths,
            ignore: IgnoreFilter::from_config(config)?,
            descriptors: DescriptorCache::new(),
            pending: VecDeque::new(),
            discovered: BTreeSet::new(),
            visited: HashSet::new(),
            roots: BTreeSet::new(),
            entries: EntryMap::new(),
            sub_package_dirs: Vec::new(),
        })
    }

    /// Resolves every root manifest, then every configuration file reachable
    /// from it, and returns the merged result.
    pub fn run(mut self, roots: Vec<PathBuf>) -> Result<ResolvedEntries> {
        let mut pending_roots: VecDeque<PathBuf> = roots.into();

        while let Some(root) = pending_roots.pop_front() {
            let root_label = entry_name(&relative_path(self.paths.cwd(), &root));
            if self.ignore.is_ignored(&root_label) {
                continue;
            }
            debug!("Expanding root manifest {}", root.display());
            self.roots.insert(root.clone());

            let root_entry = self.root_entry(&root);
            self.merge(root_entry);

            let ManifestEntries {
                main_pages,
                sub_pages,
                components,
            } = self.parse_manifest(&root)?;
            self.merge(main_pages);
            self.merge(sub_pages);
            self.merge(components);

            while let Some(config_path) = self.pending.pop_front() {
                let expanded = self.expand_config(&config_path)?;
                self.merge(expanded);
            }
        }

        debug!(
            "Resolution finished: {} entries, {} configuration files expanded",
            self.entries.len(),
            self.visited.len()
        );
        let mut json_files = self.discovered;
        json_files.extend(self.roots);
        Ok(ResolvedEntries {
            entry: self.entries,
            json_files,
            sub_packages_dir: self.sub_package_dirs,
        })
    }

    /// The root manifest itself, named by its file stem.
    fn root_entry(&self, root: &Path) -> EntryMap {
        let mut entry = EntryMap::new();
        if let Some(stem) = root.file_stem() {
            entry.insert(
                stem.to_string_lossy().into_owned(),
                EntryGroup::from(vec![root.to_path_buf()]),
            );
        }
        entry
    }

    /// Expands one configuration file's `usingComponents`, unless it has
    /// already been claimed.
    fn expand_config(&mut self, config_path: &Path) -> Result<EntryMap> {
        if !self.visited.insert(config_path.to_path_buf()) {
            debug!("Already expanded {}", config_path.display());
            return Ok(EntryMap::new());
        }
        debug!("Expanding configuration file {}", config_path.display());
        let manifest = self.fs.read_manifest(config_path)?;
        if manifest.using_components.is_empty() {
            return Ok(EntryMap::new());
        }
        self.resolve_components(config_path, &manifest.using_components)
    }

    /// Records a configuration file for later expansion.
    fn record_config(&mut self, path: PathBuf) {
        if self.discovered.insert(path.clone()) {
            debug!("Discovered configuration file {}", path.display());
            self.pending.push_back(path);
        }
    }

    fn record_sub_package_dir(&mut self, root: &str) {
        if root.is_empty() {
            warn!("Sub-package without 'root'; its pages resolve from the source root");
            return;
        }
        let dir = self.paths.resolve_absolute(root);
        if !self.sub_package_dirs.contains(&dir) {
            self.sub_package_dirs.push(dir);
        }
    }

    fn merge(&mut self, partial: EntryMap) {
        self.entries.extend(partial);
    }
}
