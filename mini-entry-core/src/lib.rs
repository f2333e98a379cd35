// mini-entry-core/src/lib.rs
//! Build-entry resolution for component-based mini-programs.
//!
//! Starting from root manifests (`app.json`), discovers every page,
//! sub-package page and transitively referenced component, including
//! components shipped inside installed dependency packages, and returns the
//! ordered group of files each bundler entry is made of.

pub mod ignore;
pub mod package;
pub mod paths;
pub mod project_fs;
pub mod reference;
pub mod resolve;

use std::path::Path;

use mini_entry_common::error::{MiniEntryError, Result};
use mini_entry_common::{EntryConfig, ResolvedEntries};
use tracing::{debug, error};

pub use project_fs::{OsFs, ProjectFs};
pub use resolve::Traversal;

/// Resolves all entries of the project in `cwd` on the real filesystem.
pub fn get_entry(config: &EntryConfig, cwd: &Path) -> Result<ResolvedEntries> {
    get_entry_with(&OsFs, config, cwd)
}

/// Resolves all entries of the project in `cwd` through `fs`.
///
/// Fails with [`MiniEntryError::NoRootManifest`] before anything is parsed
/// when no configured pattern matches a file.
pub fn get_entry_with<F: ProjectFs + ?Sized>(
    fs: &F,
    config: &EntryConfig,
    cwd: &Path,
) -> Result<ResolvedEntries> {
    config.validate()?;
    let cwd = paths::normalize(&std::path::absolute(cwd)?);

    let patterns: Vec<String> = config.all_patterns().map(String::from).collect();
    let roots = fs.match_files(&cwd, &patterns)?;
    if roots.is_empty() {
        error!("No root manifest matched {:?} in {}", patterns, cwd.display());
        return Err(MiniEntryError::NoRootManifest(patterns));
    }
    debug!("Found {} root manifest(s)", roots.len());

    Traversal::new(fs, config, &cwd)?.run(roots)
}
