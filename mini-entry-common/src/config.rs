// mini-entry-common/src/config.rs
use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{MiniEntryError, Result};

/// One glob pattern or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternSet {
    One(String),
    Many(Vec<String>),
}

impl PatternSet {
    pub fn patterns(&self) -> &[String] {
        match self {
            PatternSet::One(pattern) => std::slice::from_ref(pattern),
            PatternSet::Many(patterns) => patterns,
        }
    }
}

/// File suffixes by role. Unknown keys are kept but never read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suffixes {
    pub js: String,
    pub xml: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini_js: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Suffixes {
    pub fn new(js: impl Into<String>, xml: impl Into<String>) -> Self {
        Self {
            js: js.into(),
            xml: xml.into(),
            ..Self::default()
        }
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    pub fn script(&self) -> &str {
        trim_dot(&self.js)
    }

    pub fn template(&self) -> &str {
        trim_dot(&self.xml)
    }

    pub fn style(&self) -> Option<&str> {
        self.css.as_deref().map(trim_dot).filter(|s| !s.is_empty())
    }
}

fn trim_dot(suffix: &str) -> &str {
    suffix.strip_prefix('.').unwrap_or(suffix)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryConfig {
    /// Root-entry label to glob pattern(s), in document order.
    pub entry: IndexMap<String, PatternSet>,
    pub entry_suffix: Suffixes,
    pub compiled_suffix: Suffixes,
    /// Regular expressions; matching roots, pages and components are skipped.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_entry: Vec<String>,
}

impl EntryConfig {
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading mini-entry configuration from {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|e| {
            MiniEntryError::Config(format!(
                "Could not read configuration file {}: {e}",
                path.display()
            ))
        })?;
        let config: EntryConfig = serde_json::from_str(&raw).map_err(|e| {
            MiniEntryError::Config(format!(
                "Could not parse configuration file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        debug!("Configuration loaded successfully.");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.all_patterns().next().is_none() {
            return Err(MiniEntryError::Config(
                "'entry' must declare at least one pattern".to_string(),
            ));
        }
        for (field, suffixes) in [
            ("entrySuffix", &self.entry_suffix),
            ("compiledSuffix", &self.compiled_suffix),
        ] {
            if suffixes.script().is_empty() || suffixes.template().is_empty() {
                return Err(MiniEntryError::Config(format!(
                    "'{field}' must declare non-empty 'js' and 'xml' suffixes"
                )));
            }
        }
        self.ignore_patterns()?;
        Ok(())
    }

    /// Every configured pattern, in declaration order.
    pub fn all_patterns(&self) -> impl Iterator<Item = &str> {
        self.entry
            .values()
            .flat_map(|set| set.patterns().iter().map(String::as_str))
    }

    /// The first pattern of the first label; it determines the source root.
    pub fn primary_pattern(&self) -> Option<&str> {
        self.entry
            .first()
            .and_then(|(_, set)| set.patterns().first())
            .map(String::as_str)
    }

    pub fn ignore_patterns(&self) -> Result<Vec<Regex>> {
        self.ignore_entry
            .iter()
            .map(|raw| {
                Regex::new(raw).map_err(|e| {
                    MiniEntryError::Config(format!("Invalid ignoreEntry pattern '{raw}': {e}"))
                })
            })
            .collect()
    }
}
