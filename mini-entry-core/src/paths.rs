// mini-entry-core/src/paths.rs
//! Lexical path helpers and project-anchored path resolution.
//!
//! Entry names and references are `/`-separated strings regardless of host
//! platform; filesystem paths are `PathBuf`s.
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use mini_entry_common::{EntryConfig, DEPENDENCY_DIR};

use crate::project_fs::ProjectFs;

/// Lexically normalizes a path: drops `.`, folds `..` into its parent.
/// Leading `..` survive on relative paths; on absolute paths they stop at root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Normalizes a `/`-separated reference. A leading `/` is preserved.
pub fn normalize_reference(raw: &str) -> String {
    let rooted = raw.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }
    let joined = segments.join("/");
    if rooted {
        format!("/{joined}")
    } else {
        joined
    }
}

/// `target` relative to `base`; falls back to `target` when no relative
/// form exists (e.g. different prefixes on Windows).
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    pathdiff::diff_paths(target, base).unwrap_or_else(|| target.to_path_buf())
}

/// Renders a relative path as a `/`-separated entry name.
pub fn entry_name(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Joins `/`-separated parts, skipping empty ones.
pub fn join_reference<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    normalize_reference(
        &parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("/"),
    )
}

/// `path` with `.suffix` appended verbatim (no extension replacement).
pub fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_os_string();
    raw.push(".");
    raw.push(suffix);
    PathBuf::from(raw)
}

/// The project's source directory, relative to `cwd`: the first segment of
/// the primary root pattern. Empty when the pattern sits directly in `cwd`,
/// escapes it, or starts with a glob.
pub fn source_root_of(cwd: &Path, pattern: Option<&str>) -> PathBuf {
    let Some(pattern) = pattern else {
        return PathBuf::new();
    };
    let pattern = Path::new(pattern);
    let relative = if pattern.is_absolute() {
        relative_path(cwd, pattern)
    } else {
        pattern.to_path_buf()
    };
    let normalized = normalize(&relative);
    let mut components = normalized.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(first)), Some(_)) => {
            let first = first.to_string_lossy();
            if first.contains(['*', '?', '[', '{']) {
                PathBuf::new()
            } else {
                PathBuf::from(first.as_ref())
            }
        }
        _ => PathBuf::new(),
    }
}

/// Working directory and source root of one resolution run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    cwd: PathBuf,
    source_root: PathBuf,
}

impl ProjectPaths {
    pub fn new(cwd: &Path, config: &EntryConfig) -> Self {
        Self::with_source_root(cwd, source_root_of(cwd, config.primary_pattern()))
    }

    pub fn with_source_root(cwd: &Path, source_root: impl Into<PathBuf>) -> Self {
        Self {
            cwd: normalize(cwd),
            source_root: source_root.into(),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn source_dir(&self) -> PathBuf {
        normalize(&self.cwd.join(&self.source_root))
    }

    pub fn dependency_dir(&self) -> PathBuf {
        self.cwd.join(DEPENDENCY_DIR)
    }

    pub fn is_in_dependency_dir(&self, path: &Path) -> bool {
        path.starts_with(self.dependency_dir())
    }

    /// `cwd / source_root / relative`. A leading `/` on `relative` is ignored.
    pub fn resolve_absolute(&self, relative: impl AsRef<Path>) -> PathBuf {
        let relative = relative.as_ref();
        let relative = relative.strip_prefix("/").unwrap_or(relative);
        normalize(&self.cwd.join(&self.source_root).join(relative))
    }

    /// Resolves `relative` against a referrer. File referrers anchor at their
    /// parent directory. Dependency references anchor at `cwd` instead of the
    /// referrer; root-relative ones at the source directory.
    pub fn resolve_with_base<F: ProjectFs + ?Sized>(
        &self,
        fs: &F,
        base: &Path,
        relative: &str,
        dependency: bool,
    ) -> PathBuf {
        if relative.starts_with('/') {
            return self.resolve_absolute(relative);
        }
        let base = if dependency {
            self.cwd.clone()
        } else if base.is_absolute() {
            base.to_path_buf()
        } else {
            self.resolve_absolute(base)
        };
        if fs.is_file(&base) {
            if let Some(parent) = base.parent() {
                return normalize(&parent.join(relative));
            }
        }
        normalize(&base.join(relative))
    }

    /// `resolve_absolute(reference + "." + suffix)`.
    pub fn with_suffix(&self, reference: &str, suffix: &str) -> PathBuf {
        append_suffix(&self.resolve_absolute(reference), suffix)
    }

    /// Script path for `reference`: the primary suffix if that file exists,
    /// otherwise the secondary one, which is not checked.
    pub fn script_path<F: ProjectFs + ?Sized>(
        &self,
        fs: &F,
        reference: &str,
        primary: &str,
        secondary: &str,
    ) -> PathBuf {
        let script = self.with_suffix(reference, primary);
        if fs.exists(&script) {
            script
        } else {
            self.with_suffix(reference, secondary)
        }
    }
}
