//! # ch-infra
//!
//! File system adapters for cliphistory: the JSON history file and the TOML
//! config file, both written through [`fs::atomic_write`].

pub mod config;
pub mod fs;
pub mod history;

pub use config::FileConfigRepository;
pub use history::FileHistoryRepository;
