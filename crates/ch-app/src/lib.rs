//! # ch-app
//!
//! Application layer of cliphistory: the shared [`HistoryService`], the
//! clipboard [`CaptureLoop`] and one use case per user action.

pub mod app_paths;
pub mod capture;
pub mod history_service;
pub mod usecases;

#[cfg(test)]
pub(crate) mod testing;

pub use app_paths::AppPaths;
pub use capture::{CaptureLoop, TickOutcome};
pub use history_service::HistoryService;
