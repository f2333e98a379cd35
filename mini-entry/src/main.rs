// mini-entry/src/main.rs
use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use mini_entry_common::config::EntryConfig;
use mini_entry_common::error::{MiniEntryError, Result as meResult};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::CliArgs;

const DEFAULT_CONFIG_FILE: &str = "mini-entry.json";

fn init_logging(verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("MINI_ENTRY_LOG")
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .without_time()
        .try_init();
}

fn load_config(cli_args: &CliArgs, cwd: &std::path::Path) -> meResult<EntryConfig> {
    let config_path = cli_args
        .config
        .clone()
        .or_else(|| env::var("MINI_ENTRY_CONFIG").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config_path = if config_path.is_absolute() {
        config_path
    } else {
        cwd.join(config_path)
    };
    EntryConfig::load(&config_path)
}

fn run(cli_args: &CliArgs) -> meResult<()> {
    let cwd = match &cli_args.cwd {
        Some(dir) => dir.clone(),
        None => env::current_dir().map_err(|e| {
            MiniEntryError::Config(format!("Could not determine working directory: {e}"))
        })?,
    };
    debug!("Working directory: {}", cwd.display());

    let config = load_config(cli_args, &cwd)?;
    let resolved = mini_entry_core::get_entry(&config, &cwd)?;
    cli_args.command.run(&resolved)
}

fn main() {
    let cli_args = CliArgs::parse();
    init_logging(cli_args.verbose);

    if let Err(e) = run(&cli_args) {
        tracing::error!("Command failed: {:#}", e);
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }

    debug!("Command completed successfully.");
}
