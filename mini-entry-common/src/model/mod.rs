// mini-entry-common/src/model/mod.rs
pub mod descriptor;
pub mod entry;
pub mod manifest;

pub use descriptor::PackageDescriptor;
pub use entry::{EntryGroup, EntryMap, ResolvedEntries};
pub use manifest::{Manifest, SubPackage};
