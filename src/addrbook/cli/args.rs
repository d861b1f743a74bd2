use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", version)]
#[command(about = "Console address book with paged listing and search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Keep data in the per-user data directory instead of the current one
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Directory holding addressbook.json and notes.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Contacts per page for `show all` (overrides config.json)
    #[arg(long, global = true, value_name = "N")]
    pub page_size: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive prompt (the default)
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, contacts-file, notes-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
