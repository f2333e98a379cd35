use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum MiniEntryError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid glob pattern '{0}': {1}")]
    Pattern(String, String),

    #[error("Not Found Entry File: no root manifest matched {0:?}")]
    NoRootManifest(Vec<String>),

    #[error("Failed to read manifest {}: {reason}", .path.display())]
    ManifestRead { path: PathBuf, reason: String },

    #[error("Invalid dependency package for reference '{reference}': {reason}")]
    DescriptorInvalid { reference: String, reason: String },
}

impl MiniEntryError {
    pub fn manifest_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        MiniEntryError::ManifestRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn descriptor_invalid(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        MiniEntryError::DescriptorInvalid {
            reference: reference.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for MiniEntryError {
    fn from(err: std::io::Error) -> Self {
        MiniEntryError::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for MiniEntryError {
    fn from(err: serde_json::Error) -> Self {
        MiniEntryError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, MiniEntryError>;
