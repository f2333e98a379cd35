// mini-entry-aio/src/json_io.rs
use std::path::Path;

use mini_entry_common::error::{MiniEntryError, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Reads and deserializes a JSON file. Read and parse failures are both
/// reported as `ManifestRead` against `path`.
pub fn read_json_sync<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Sync Reading JSON from: {}", path.display());
    let raw = crate::fs::read_to_string(path)
        .map_err(|e| MiniEntryError::manifest_read(path, e))?;
    serde_json::from_str(&raw).map_err(|e| MiniEntryError::manifest_read(path, e))
}
