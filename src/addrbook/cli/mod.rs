//! # CLI Layer
//!
//! One possible UI client for the addrbook library. This is the only place
//! that touches stdin/stdout, reads process arguments or sets up logging.
//!
//! - `args`: clap definitions for the process arguments
//! - `parser`: turns a typed line into a `CommandKind` and its arguments
//! - `repl`: the prompt loop and the `CommandKind` dispatch
//! - `print`: renders a `CmdResult` as text

mod args;
mod parser;
mod print;
mod repl;

use addrbook::api::{BookApi, ConfigAction};
use addrbook::config::BookConfig;
use addrbook::error::{BookError, Result};
use addrbook::store::fs::FileStore;
use args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(&cli)?;
    let config = BookConfig::load(&data_dir)?;
    let page_size = cli.page_size.unwrap_or(config.page_size);
    tracing::debug!(data_dir = %data_dir.display(), page_size, "starting");

    let store = FileStore::from_config(data_dir.clone(), &config);
    let mut api = BookApi::open(store, data_dir, page_size)?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        Some(Commands::Shell) | None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            repl::run_loop(&mut api, stdin.lock(), &mut stdout)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// `--data-dir` wins, then `--global`, then the current directory.
fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if cli.global {
        let proj_dirs = ProjectDirs::from("com", "addrbook", "addrbook").ok_or_else(|| {
            BookError::Store("Could not determine the user data directory".to_string())
        })?;
        return Ok(proj_dirs.data_dir().to_path_buf());
    }
    Ok(std::env::current_dir()?)
}

fn handle_config(
    api: &BookApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    println!("{}", print::render_result(&result));
    Ok(())
}
