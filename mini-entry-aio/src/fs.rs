/*
File: mini-entry-aio/src/fs.rs
Purpose: Primitive synchronous filesystem probes.
*/
use std::fs;
use std::path::Path;

use mini_entry_common::error::{MiniEntryError, Result};
use tracing::{debug, error};

/// Checks if a path exists (resolving symlinks).
pub fn check_path_exists(path: &Path) -> bool {
    path.exists()
}

/// Checks if a path points to a directory (resolving symlinks).
pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}

/// Checks if a path points to a regular file (resolving symlinks).
pub fn is_file(path: &Path) -> bool {
    path.is_file()
}

/// Reads the entire contents of a file into a string.
pub fn read_to_string(path: &Path) -> Result<String> {
    debug!("Reading file to string: {}", path.display());
    fs::read_to_string(path).map_err(|e| {
        error!("Failed read file {}: {}", path.display(), e);
        MiniEntryError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probes_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.json");
        std::fs::write(&file, "{}").unwrap();

        assert!(check_path_exists(&file));
        assert!(is_file(&file));
        assert!(!is_directory(&file));
        assert!(is_directory(dir.path()));
        assert!(!check_path_exists(&dir.path().join("missing")));
        assert_eq!(read_to_string(&file).unwrap(), "{}");
        assert!(matches!(
            read_to_string(&dir.path().join("missing")),
            Err(MiniEntryError::Io(_))
        ));
    }
}
