use serde::{Deserialize, Serialize};

/// The `package.json` of an installed dependency package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    /// Explicit mini-program entry directory, e.g. `miniprogram_dist`.
    #[serde(default)]
    pub miniprogram: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

impl PackageDescriptor {
    /// The subdirectory holding the package's mini-program entry files:
    /// `miniprogram` if declared, else the first entry of `files`.
    pub fn entry_subdir(&self) -> Option<&str> {
        self.miniprogram
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .or_else(|| self.files.first().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miniprogram_field_wins_over_files() {
        let desc: PackageDescriptor = serde_json::from_str(
            r#"{"name": "vant", "miniprogram": "lib", "files": ["dist", "lib"]}"#,
        )
        .unwrap();
        assert_eq!(desc.entry_subdir(), Some("lib"));
    }

    #[test]
    fn falls_back_to_first_file_then_none() {
        let desc: PackageDescriptor =
            serde_json::from_str(r#"{"files": ["miniprogram_dist", "README.md"]}"#).unwrap();
        assert_eq!(desc.entry_subdir(), Some("miniprogram_dist"));

        let empty: PackageDescriptor = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert_eq!(empty.entry_subdir(), None);
    }
}
