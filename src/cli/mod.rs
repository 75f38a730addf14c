//! Command line surface.

mod commands;
pub mod picker;

use clap::{Parser, Subcommand};

pub use commands::run;

#[derive(Debug, Parser)]
#[command(name = "cliphistory")]
#[command(about = "Clipboard history with pinning and fuzzy search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Watch the clipboard and record history until Ctrl+C
    Daemon {
        /// Sampling interval in milliseconds (50-5000), overrides the config file
        #[arg(long)]
        poll_ms: Option<i64>,
    },
    /// Save the current clipboard text to history
    Save,
    /// List history, pinned entries first
    List {
        /// Show at most N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Fuzzy search the history
    Search {
        query: String,
        /// Show at most N matches
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Copy the entry at INDEX to the clipboard
    Copy { index: usize },
    /// Copy the entry at INDEX and paste it into the focused window
    Paste { index: usize },
    /// Pin or unpin the entry at INDEX
    Pin { index: usize },
    /// Delete the entry at INDEX
    Delete { index: usize },
    /// Remove all entries and pins
    Clear,
    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Interactive picker: filter, pin, delete and paste
    Pick,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Change settings; omitted values are kept
    Set {
        /// History capacity (10-10000)
        #[arg(long)]
        max_history: Option<i64>,
        /// Clipboard sampling interval in milliseconds (50-5000)
        #[arg(long)]
        poll_ms: Option<i64>,
    },
}

impl Commands {
    pub fn is_daemon(&self) -> bool {
        matches!(self, Commands::Daemon { .. })
    }
}
