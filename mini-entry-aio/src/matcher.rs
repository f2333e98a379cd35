// mini-entry-aio/src/matcher.rs
//! File matching: root manifest discovery by glob and package descriptor
//! discovery by directory walk.
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use mini_entry_common::error::{MiniEntryError, Result};
use mini_entry_common::{DEPENDENCY_DIR, DESCRIPTOR_FILE};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Expands `patterns` against `cwd` and returns the matching files as
/// absolute paths, sorted and deduplicated. Directories are skipped.
pub fn match_files(cwd: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut found = BTreeSet::new();
    for pattern in patterns {
        // Only the user pattern is glob syntax; metacharacters in cwd are literal.
        let anchored = if Path::new(pattern).is_absolute() {
            pattern.clone()
        } else {
            let base = glob::Pattern::escape(&cwd.to_string_lossy());
            format!(
                "{}/{}",
                base.trim_end_matches('/'),
                pattern.trim_start_matches("./")
            )
        };
        debug!("Matching root pattern {}", anchored);

        let paths = glob::glob(&anchored)
            .map_err(|e| MiniEntryError::Pattern(pattern.clone(), e.to_string()))?;
        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => {
                    found.insert(path);
                }
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable match for {}: {}", pattern, e),
            }
        }
    }
    debug!("Matched {} file(s) for {:?}", found.len(), patterns);
    Ok(found.into_iter().collect())
}

/// Lists every package descriptor below `package_dir`, skipping anything
/// nested inside another installed package.
pub fn find_descriptors(package_dir: &Path) -> Vec<PathBuf> {
    let mut descriptors = Vec::new();
    let walker = WalkDir::new(package_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || e.file_name() != DEPENDENCY_DIR);
    for entry in walker.filter_map(|e| e.ok()) {
        if entry.file_type().is_file() && entry.file_name() == DESCRIPTOR_FILE {
            descriptors.push(entry.into_path());
        }
    }
    descriptors.sort();
    debug!(
        "Found {} descriptor(s) under {}",
        descriptors.len(),
        package_dir.display()
    );
    descriptors
}
