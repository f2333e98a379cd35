use std::path::PathBuf;

use clap::Args;
use mini_entry_common::error::Result;
use mini_entry_common::ResolvedEntries;
use tracing::debug;

/// Print the resolved entries as JSON
#[derive(Args, Debug)]
pub struct Resolve {
    /// Write the JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print only the entry mapping, without jsonFiles / subPackagesDir
    #[arg(long)]
    pub entries_only: bool,
}

impl Resolve {
    pub fn run(&self, resolved: &ResolvedEntries) -> Result<()> {
        let json = if self.entries_only {
            serde_json::to_string_pretty(&resolved.entry)?
        } else {
            serde_json::to_string_pretty(resolved)?
        };

        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, json)?;
                debug!("Wrote {} entries to {}", resolved.len(), path.display());
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}
