// mini-entry-core/src/reference.rs
//! Classification of raw component references.
//!
//! Precedence, first match wins:
//! 1. a `node_modules` segment anywhere, or a bare path whose first segment
//!    is an installed package: [`Reference::DependencyPackage`];
//! 2. a leading `/`: [`Reference::RootRelative`];
//! 3. everything else: [`Reference::ReferrerRelative`].
use mini_entry_common::DEPENDENCY_DIR;

use crate::paths::normalize_reference;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// Path relative to the working directory, always starting with the
    /// dependency directory, e.g. `node_modules/vant/button/index`.
    DependencyPackage(String),
    /// Path relative to the source root, leading `/` stripped.
    RootRelative(String),
    /// Path relative to the declaring manifest's directory.
    ReferrerRelative(String),
}

/// Classifies `raw`. `is_installed` answers whether a package of the given
/// name exists in the dependency directory; it is only consulted for bare
/// paths.
pub fn classify(raw: &str, is_installed: impl Fn(&str) -> bool) -> Reference {
    let normalized = normalize_reference(raw.trim());

    if let Some(inside) = dependency_suffix(&normalized) {
        return Reference::DependencyPackage(format!("{DEPENDENCY_DIR}/{inside}"));
    }

    if let Some(stripped) = normalized.strip_prefix('/') {
        return Reference::RootRelative(stripped.to_string());
    }

    if is_bare(raw.trim()) {
        if let Some(first) = normalized.split('/').next().filter(|s| !s.is_empty()) {
            if is_installed(first) {
                return Reference::DependencyPackage(format!("{DEPENDENCY_DIR}/{normalized}"));
            }
        }
    }

    Reference::ReferrerRelative(normalized)
}

/// Whether `path` (a `/`-separated reference) has a dependency-directory
/// segment. Returns the part after the first such segment, so packages
/// installed inside another package stay under their outer package.
pub fn dependency_suffix(path: &str) -> Option<&str> {
    let marker = format!("{DEPENDENCY_DIR}/");
    path.strip_prefix(&marker)
        .or_else(|| path.split_once(&format!("/{marker}")).map(|(_, rest)| rest))
}

fn is_bare(raw: &str) -> bool {
    !(raw.starts_with('/')
        || raw.starts_with("./")
        || raw.starts_with("../")
        || raw == "."
        || raw == "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none_installed(_: &str) -> bool {
        false
    }

    #[test]
    fn dependency_directory_wins_over_root_marker() {
        assert_eq!(
            classify("/node_modules/vant/button/index", none_installed),
            Reference::DependencyPackage("node_modules/vant/button/index".into())
        );
        assert_eq!(
            classify("../../node_modules/vant/icon/index", none_installed),
            Reference::DependencyPackage("node_modules/vant/icon/index".into())
        );
        assert_eq!(
            classify("node_modules/a/node_modules/b/c", none_installed),
            Reference::DependencyPackage("node_modules/a/node_modules/b/c".into())
        );
    }

    #[test]
    fn leading_separator_is_root_relative() {
        assert_eq!(
            classify("/components/nav/nav", none_installed),
            Reference::RootRelative("components/nav/nav".into())
        );
    }

    #[test]
    fn dotted_paths_are_referrer_relative() {
        assert_eq!(
            classify("./card/card", |_| true),
            Reference::ReferrerRelative("card/card".into())
        );
        assert_eq!(
            classify("../shared/btn", |_| true),
            Reference::ReferrerRelative("../shared/btn".into())
        );
    }

    #[test]
    fn bare_paths_depend_on_installed_packages() {
        assert_eq!(
            classify("vant/button/index", |name| name == "vant"),
            Reference::DependencyPackage("node_modules/vant/button/index".into())
        );
        assert_eq!(
            classify("components/foo/foo", |name| name == "vant"),
            Reference::ReferrerRelative("components/foo/foo".into())
        );
        assert_eq!(
            classify("@scope/ui/button", |name| name == "@scope"),
            Reference::DependencyPackage("node_modules/@scope/ui/button".into())
        );
    }

    #[test]
    fn node_modules_lookalikes_are_not_dependencies() {
        assert_eq!(dependency_suffix("my_node_modules/x"), None);
        assert_eq!(dependency_suffix("a/node_modules_x/y"), None);
        assert_eq!(dependency_suffix("a/node_modules/y"), Some("y"));
        assert_eq!(
            dependency_suffix("../node_modules/a/node_modules/b/x"),
            Some("a/node_modules/b/x")
        );
    }
}
