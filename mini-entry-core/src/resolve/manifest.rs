// mini-entry-core/src/resolve/manifest.rs
use std::path::Path;

use mini_entry_common::error::Result;
use mini_entry_common::EntryMap;
use tracing::debug;

use super::pages::PageRef;
use super::Traversal;
use crate::paths::join_reference;
use crate::project_fs::ProjectFs;

/// The three partial entry maps produced by one manifest, in merge order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestEntries {
    pub main_pages: EntryMap,
    pub sub_pages: EntryMap,
    pub components: EntryMap,
}

impl<F: ProjectFs + ?Sized> Traversal<'_, F> {
    /// Reads a manifest and resolves its pages, sub-package pages (named
    /// `root/page`) and `usingComponents`. A read or parse failure is fatal.
    pub fn parse_manifest(&mut self, manifest_path: &Path) -> Result<ManifestEntries> {
        let manifest = self.fs.read_manifest(manifest_path)?;
        debug!(
            "Manifest {}: {} page(s), {} sub-package(s), {} component(s)",
            manifest_path.display(),
            manifest.pages.len(),
            manifest.subpackages.len(),
            manifest.using_components.len()
        );

        let main_refs: Vec<PageRef> = manifest
            .pages
            .iter()
            .map(|page| PageRef::from_page(page))
            .collect();
        let main_pages = self.resolve_pages(&main_refs)?;

        let mut sub_refs = Vec::new();
        for sub_package in &manifest.subpackages {
            self.record_sub_package_dir(sub_package.root());
            sub_refs.extend(
                sub_package
                    .pages
                    .iter()
                    .map(|page| join_reference([sub_package.root(), page.as_str()]))
                    .map(|page| PageRef::from_page(&page)),
            );
        }
        let sub_pages = self.resolve_pages(&sub_refs)?;

        let components = self.resolve_components(manifest_path, &manifest.using_components)?;

        Ok(ManifestEntries {
            main_pages,
            sub_pages,
            components,
        })
    }
}
