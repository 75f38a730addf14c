//! # ch-core
//!
//! Core domain models and business logic for cliphistory.
//!
//! This crate contains the history engine without any infrastructure
//! dependencies: the entry model, the capture/retention policy, fuzzy
//! ranking, the picker view state and the ports implemented by the
//! infrastructure and platform layers.

pub mod app_dirs;
pub mod config;
pub mod history;
pub mod ports;
pub mod search;
pub mod view;

pub use config::{ConfigError, HistoryConfig};
pub use history::{Entry, HistoryError, HistoryState, HistoryStore};
pub use search::{rank, RankedEntry};
pub use view::{apply_filter, move_selection, ViewState};
