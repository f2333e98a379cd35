use std::path::Path;

use clap::Args;
use colored::Colorize;
use mini_entry_common::error::Result;
use mini_entry_common::{ResolvedEntries, DEPENDENCY_DIR};
use prettytable::{format, Cell, Row, Table};

/// Show a table of resolved entries
#[derive(Args, Debug)]
pub struct List {
    /// Show every file of each entry, not just the count
    #[arg(long)]
    pub files: bool,
}

impl List {
    pub fn run(&self, resolved: &ResolvedEntries) -> Result<()> {
        if resolved.is_empty() {
            println!("{}", "0 entries resolved".yellow());
            return Ok(());
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.add_row(Row::new(vec![
            Cell::new("Kind").style_spec("b"),
            Cell::new("Entry").style_spec("b"),
            Cell::new(if self.files { "Files" } else { "Count" }).style_spec("b"),
        ]));

        let mut dependency_count = 0;
        for (name, group) in &resolved.entry {
            let is_dependency = group.iter().any(is_dependency_file);
            let kind = if is_dependency {
                dependency_count += 1;
                Cell::new("Package").style_spec("Fy")
            } else {
                Cell::new("Project").style_spec("Fg")
            };
            let files = if self.files {
                group
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            } else {
                group.len().to_string()
            };
            table.add_row(Row::new(vec![
                kind,
                Cell::new(name).style_spec("Fb"),
                Cell::new(&files),
            ]));
        }
        table.printstd();

        println!(
            "{}",
            format!(
                "{} entries ({} from packages), {} json files, {} sub-packages",
                resolved.len(),
                dependency_count,
                resolved.json_files.len(),
                resolved.sub_packages_dir.len()
            )
            .bold()
        );
        Ok(())
    }
}

fn is_dependency_file(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == DEPENDENCY_DIR)
}
