// mini-entry-core/src/project_fs.rs
//! The filesystem collaborators the resolver consumes: file matcher, JSON
//! reader and existence checks.
use std::path::{Path, PathBuf};

use mini_entry_common::error::Result;
use mini_entry_common::{Manifest, PackageDescriptor};

pub trait ProjectFs {
    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Absolute paths of the files matching any of `patterns`, relative
    /// patterns being anchored at `cwd`.
    fn match_files(&self, cwd: &Path, patterns: &[String]) -> Result<Vec<PathBuf>>;

    fn read_manifest(&self, path: &Path) -> Result<Manifest>;

    fn read_descriptor(&self, path: &Path) -> Result<PackageDescriptor>;

    /// Package descriptors under `package_dir`, excluding nested packages.
    fn find_descriptors(&self, package_dir: &Path) -> Vec<PathBuf>;
}

impl<T: ProjectFs + ?Sized> ProjectFs for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn match_files(&self, cwd: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
        (**self).match_files(cwd, patterns)
    }

    fn read_manifest(&self, path: &Path) -> Result<Manifest> {
        (**self).read_manifest(path)
    }

    fn read_descriptor(&self, path: &Path) -> Result<PackageDescriptor> {
        (**self).read_descriptor(path)
    }

    fn find_descriptors(&self, package_dir: &Path) -> Vec<PathBuf> {
        (**self).find_descriptors(package_dir)
    }
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl ProjectFs for OsFs {
    fn exists(&self, path: &Path) -> bool {
        mini_entry_aio::check_path_exists(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        mini_entry_aio::is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        mini_entry_aio::is_directory(path)
    }

    fn match_files(&self, cwd: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
        mini_entry_aio::match_files(cwd, patterns)
    }

    fn read_manifest(&self, path: &Path) -> Result<Manifest> {
        mini_entry_aio::read_json_sync(path)
    }

    fn read_descriptor(&self, path: &Path) -> Result<PackageDescriptor> {
        mini_entry_aio::read_json_sync(path)
    }

    fn find_descriptors(&self, package_dir: &Path) -> Vec<PathBuf> {
        mini_entry_aio::find_descriptors(package_dir)
    }
}
