//! TOML configuration file storage.
//!
//! Loading is plain data mapping: read the file, parse it, hand the raw
//! values to [`ch_core::HistoryConfig::from_raw`] which owns the bounds.

mod file_repo;

pub use file_repo::{FileConfigRepository, CONFIG_FILE_NAME};
