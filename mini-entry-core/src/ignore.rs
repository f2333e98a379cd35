// mini-entry-core/src/ignore.rs
use mini_entry_common::error::Result;
use mini_entry_common::EntryConfig;
use regex::Regex;
use tracing::debug;

/// `ignoreEntry` patterns. A candidate matching any of them is skipped.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    patterns: Vec<Regex>,
}

impl IgnoreFilter {
    pub fn from_config(config: &EntryConfig) -> Result<Self> {
        Ok(Self {
            patterns: config.ignore_patterns()?,
        })
    }

    pub fn is_ignored(&self, candidate: &str) -> bool {
        match self.patterns.iter().find(|re| re.is_match(candidate)) {
            Some(re) => {
                debug!("Ignoring '{}' (matched ignoreEntry /{}/)", candidate, re.as_str());
                true
            }
            None => false,
        }
    }
}
