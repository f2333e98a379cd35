// mini-entry-aio/src/lib.rs
//! Blocking IO for mini-entry: filesystem probes, JSON reading, glob
//! matching and package descriptor discovery.

pub mod fs;
pub mod json_io;
pub mod matcher;

pub use fs::*;
pub use json_io::read_json_sync;
pub use matcher::{find_descriptors, match_files};
