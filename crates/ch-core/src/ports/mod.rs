//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! or platform implementations, keeping the history engine independent of
//! the clipboard backend, the paste mechanism and the file system.

pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod history_repository;
pub mod paste;

pub use app_dirs::AppDirsPort;
pub use clipboard::ClipboardSourcePort;
pub use config::ConfigPort;
pub use errors::AppDirsError;
pub use history_repository::HistoryRepositoryPort;
pub use paste::PasteInjectorPort;
