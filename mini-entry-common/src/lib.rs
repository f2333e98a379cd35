// mini-entry-common/src/lib.rs
pub mod config;
pub mod error;
pub mod model;

// Re-export key types
pub use config::{EntryConfig, Suffixes};
pub use error::{MiniEntryError, Result};
pub use model::{EntryGroup, EntryMap, Manifest, PackageDescriptor, ResolvedEntries};

/// Directory holding installed third-party packages.
pub const DEPENDENCY_DIR: &str = "node_modules";
/// Metadata file of an installed package.
pub const DESCRIPTOR_FILE: &str = "package.json";
/// Extension of every manifest / configuration file.
pub const CONFIG_EXT: &str = "json";
