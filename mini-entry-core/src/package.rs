// mini-entry-core/src/package.rs
//! Entry synthesis for components that live inside an installed dependency
//! package.
//!
//! A reference such as `node_modules/vant/button/index` names a component by
//! its package path; the package's descriptor declares which subdirectory
//! (e.g. `dist`) actually holds the compiled mini-program files. The entry
//! points at `node_modules/vant/dist/button/index.*` but is named
//! `vant/button/index`, so spelling out the subdirectory or not yields the
//! same entry.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use mini_entry_common::error::{MiniEntryError, Result};
use mini_entry_common::{EntryGroup, Suffixes, CONFIG_EXT, DEPENDENCY_DIR};
use tracing::{debug, error};

use crate::paths::{append_suffix, entry_name, join_reference, normalize_reference, relative_path};
use crate::project_fs::ProjectFs;
use crate::reference::dependency_suffix;

/// Component file used when a reference names a package root only.
const DEFAULT_COMPONENT: &str = "index";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    pub name: String,
    pub group: EntryGroup,
    /// The component's configuration file, whether or not it exists.
    pub config: PathBuf,
}

/// Per-run memo of package descriptor lookups. Each package name is walked
/// once and each owning descriptor is read once.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    /// package name -> package root directories (relative to the dependency
    /// directory) that carry a descriptor.
    owners: HashMap<String, Vec<String>>,
    /// package root directory -> declared entry subdirectory.
    entry_subdirs: HashMap<String, String>,
}

impl DescriptorCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn owner<F: ProjectFs + ?Sized>(
        &mut self,
        fs: &F,
        dependency_dir: &Path,
        package_name: &str,
        path_in_packages: &str,
        reference: &str,
    ) -> Result<String> {
        let candidates = self
            .owners
            .entry(package_name.to_string())
            .or_insert_with(|| {
                fs.find_descriptors(&dependency_dir.join(package_name))
                    .iter()
                    .filter_map(|descriptor| descriptor.parent())
                    .map(|dir| entry_name(&relative_path(dependency_dir, dir)))
                    .filter(|dir| !dir.split('/').any(|seg| seg == DEPENDENCY_DIR))
                    .collect()
            });

        candidates
            .iter()
            .filter(|dir| has_segment_prefix(path_in_packages, dir))
            .min_by_key(|dir| dir.split('/').count())
            .cloned()
            .ok_or_else(|| {
                error!("No package descriptor owns '{}'", reference);
                MiniEntryError::descriptor_invalid(
                    reference,
                    format!(
                        "no {} found for package '{package_name}' under {}",
                        mini_entry_common::DESCRIPTOR_FILE,
                        dependency_dir.display()
                    ),
                )
            })
    }

    fn entry_subdir<F: ProjectFs + ?Sized>(
        &mut self,
        fs: &F,
        dependency_dir: &Path,
        package_root: &str,
        reference: &str,
    ) -> Result<String> {
        if let Some(subdir) = self.entry_subdirs.get(package_root) {
            return Ok(subdir.clone());
        }

        let descriptor_path = dependency_dir
            .join(package_root)
            .join(mini_entry_common::DESCRIPTOR_FILE);
        debug!("Reading package descriptor {}", descriptor_path.display());
        let descriptor = fs.read_descriptor(&descriptor_path)?;
        let subdir = descriptor
            .entry_subdir()
            .map(normalize_reference)
            .map(|dir| dir.trim_start_matches('/').to_string())
            .ok_or_else(|| {
                error!(
                    "Descriptor {} declares neither 'miniprogram' nor 'files'",
                    descriptor_path.display()
                );
                MiniEntryError::descriptor_invalid(
                    reference,
                    format!(
                        "{} declares neither 'miniprogram' nor 'files'",
                        descriptor_path.display()
                    ),
                )
            })?;

        self.entry_subdirs
            .insert(package_root.to_string(), subdir.clone());
        Ok(subdir)
    }
}

/// Builds the entry for a dependency-package reference (relative to the
/// working directory, starting with the dependency directory).
///
/// Group order: compiled script, compiled template, configuration, and the
/// compiled style only when it exists.
pub fn build_package_entry<F: ProjectFs + ?Sized>(
    fs: &F,
    cwd: &Path,
    compiled: &Suffixes,
    reference: &str,
    cache: &mut DescriptorCache,
) -> Result<PackageEntry> {
    let normalized = normalize_reference(reference);
    let path_in_packages = dependency_suffix(&normalized)
        .unwrap_or(normalized.trim_start_matches('/'))
        .to_string();
    let package_name = path_in_packages
        .split('/')
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| MiniEntryError::descriptor_invalid(reference, "missing package name"))?;

    let dependency_dir = cwd.join(DEPENDENCY_DIR);
    let package_root = cache.owner(
        fs,
        &dependency_dir,
        package_name,
        &path_in_packages,
        reference,
    )?;
    let entry_subdir = cache.entry_subdir(fs, &dependency_dir, &package_root, reference)?;

    let mut remainder = strip_segments(&path_in_packages, &package_root);
    remainder = strip_segments(remainder, &entry_subdir);
    let remainder = if remainder.is_empty() {
        DEFAULT_COMPONENT
    } else {
        remainder
    };

    let entry_path = join_reference([package_root.as_str(), entry_subdir.as_str(), remainder]);
    let base = dependency_dir.join(&entry_path);
    let name = join_reference([package_root.as_str(), remainder]);
    debug!(
        "Dependency reference '{}' -> entry '{}' at {}",
        reference,
        name,
        base.display()
    );

    let config = append_suffix(&base, CONFIG_EXT);
    let mut group = EntryGroup::new();
    group.push(append_suffix(&base, compiled.script()));
    group.push(append_suffix(&base, compiled.template()));
    group.push(config.clone());
    if let Some(style) = compiled.style() {
        let style_path = append_suffix(&base, style);
        if fs.exists(&style_path) {
            group.push(style_path);
        }
    }

    Ok(PackageEntry {
        name,
        group,
        config,
    })
}

fn has_segment_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// `path` with a leading `prefix` (whole segments only) removed.
fn strip_segments<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return path;
    }
    if path == prefix {
        return "";
    }
    match path.strip_prefix(prefix) {
        Some(rest) if rest.starts_with('/') => &rest[1..],
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::project_fs::OsFs;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn compiled() -> Suffixes {
        Suffixes::new("js", "wxml").with_css("wxss")
    }

    #[test]
    fn segment_helpers() {
        assert!(has_segment_prefix("vant/dist/button", "vant"));
        assert!(has_segment_prefix("vant", "vant"));
        assert!(!has_segment_prefix("vant-ui/button", "vant"));
        assert_eq!(strip_segments("vant/dist/button", "vant"), "dist/button");
        assert_eq!(strip_segments("distance/x", "dist"), "distance/x");
        assert_eq!(strip_segments("dist", "dist"), "");
        assert_eq!(strip_segments("a/b", ""), "a/b");
    }

    #[test]
    fn entry_name_ignores_spelled_out_subdir() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path();
        let pkg = cwd.join("node_modules/vant");
        write(&pkg.join("package.json"), r#"{"name": "vant", "miniprogram": "dist"}"#);
        write(&pkg.join("dist/button/index.js"), "");
        write(&pkg.join("dist/button/index.wxss"), "");

        let mut cache = DescriptorCache::new();
        let short = build_package_entry(
            &OsFs,
            cwd,
            &compiled(),
            "node_modules/vant/button/index",
            &mut cache,
        )
        .unwrap();
        let long = build_package_entry(
            &OsFs,
            cwd,
            &compiled(),
            "node_modules/vant/dist/button/index",
            &mut cache,
        )
        .unwrap();

        assert_eq!(short.name, "vant/button/index");
        assert_eq!(short, long);
        let base = pkg.join("dist/button/index");
        assert_eq!(
            short.group.files(),
            &[
                append_suffix(&base, "js"),
                append_suffix(&base, "wxml"),
                append_suffix(&base, "json"),
                append_suffix(&base, "wxss"),
            ]
        );
        assert_eq!(short.config, append_suffix(&base, "json"));
    }

    #[test]
    fn style_is_omitted_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path();
        write(
            &cwd.join("node_modules/ui/package.json"),
            r#"{"files": ["miniprogram_dist", "README.md"]}"#,
        );

        let entry = build_package_entry(
            &OsFs,
            cwd,
            &compiled(),
            "node_modules/ui/cell/index",
            &mut DescriptorCache::new(),
        )
        .unwrap();
        assert_eq!(entry.name, "ui/cell/index");
        assert_eq!(entry.group.len(), 3);
        assert!(entry.group.files()[0].ends_with("ui/miniprogram_dist/cell/index.js"));
    }

    #[test]
    fn shortest_owner_wins_and_nested_packages_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path();
        let pkg = cwd.join("node_modules/@scope");
        write(&pkg.join("ui/package.json"), r#"{"miniprogram": "lib"}"#);
        write(&pkg.join("ui/lib/package.json"), r#"{"miniprogram": "wrong"}"#);
        write(
            &pkg.join("ui/node_modules/ui/package.json"),
            r#"{"miniprogram": "nested"}"#,
        );

        let entry = build_package_entry(
            &OsFs,
            cwd,
            &compiled(),
            "node_modules/@scope/ui/lib/tag/index",
            &mut DescriptorCache::new(),
        )
        .unwrap();
        assert_eq!(entry.name, "@scope/ui/tag/index");
        assert!(entry.group.files()[0].ends_with("@scope/ui/lib/tag/index.js"));
    }

    #[test]
    fn nested_install_stays_under_outer_package() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path();
        let outer = cwd.join("node_modules/outer");
        write(&outer.join("package.json"), r#"{"files": ["."]}"#);
        write(
            &outer.join("node_modules/inner/package.json"),
            r#"{"miniprogram": "dist"}"#,
        );
        // A hoisted copy that must not be picked up.
        write(
            &cwd.join("node_modules/inner/package.json"),
            r#"{"miniprogram": "hoisted"}"#,
        );

        let entry = build_package_entry(
            &OsFs,
            cwd,
            &compiled(),
            "node_modules/outer/node_modules/inner/comp/index",
            &mut DescriptorCache::new(),
        )
        .unwrap();
        assert_eq!(entry.name, "outer/node_modules/inner/comp/index");
        assert_eq!(entry.config, outer.join("node_modules/inner/comp/index.json"));
    }

    #[test]
    fn missing_descriptor_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path();
        fs::create_dir_all(cwd.join("node_modules/ghost/button")).unwrap();

        let err = build_package_entry(
            &OsFs,
            cwd,
            &compiled(),
            "node_modules/ghost/button/index",
            &mut DescriptorCache::new(),
        )
        .unwrap_err();
        match err {
            MiniEntryError::DescriptorInvalid { reference, .. } => {
                assert_eq!(reference, "node_modules/ghost/button/index")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn descriptor_without_entry_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path();
        write(&cwd.join("node_modules/bare/package.json"), r#"{"name": "bare"}"#);

        let err = build_package_entry(
            &OsFs,
            cwd,
            &compiled(),
            "node_modules/bare/x/index",
            &mut DescriptorCache::new(),
        )
        .unwrap_err();
        assert!(matches!(err, MiniEntryError::DescriptorInvalid { .. }));
    }

    #[test]
    fn package_root_reference_uses_index() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path();
        write(&cwd.join("node_modules/solo/package.json"), r#"{"miniprogram": "./dist/"}"#);

        let entry = build_package_entry(
            &OsFs,
            cwd,
            &compiled(),
            "node_modules/solo",
            &mut DescriptorCache::new(),
        )
        .unwrap();
        assert_eq!(entry.name, "solo/index");
        assert!(entry.group.files()[0].ends_with("solo/dist/index.js"));
    }
}
