// mini-entry/src/cli.rs
//! Defines the command-line argument structure using clap.
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use mini_entry_common::error::Result;
use mini_entry_common::ResolvedEntries;

pub mod list;
pub mod resolve;

use crate::cli::list::List;
use crate::cli::resolve::Resolve;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "mini-entry", bin_name = "mini-entry")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: mini-entry.json in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Project working directory (default: current directory)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Resolve(Resolve),
    List(List),
}

impl Command {
    pub fn run(&self, resolved: &ResolvedEntries) -> Result<()> {
        match self {
            Self::Resolve(command) => command.run(resolved),
            Self::List(command) => command.run(resolved),
        }
    }
}
