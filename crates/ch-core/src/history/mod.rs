//! Clipboard history domain.
//!
//! ```text
//! ClipboardSource ─▶ CaptureLoop ─▶ HistoryStore::ingest ─▶ HistoryRepositoryPort::save
//!                                        │
//!                                        └─▶ ordered_view ─▶ search::rank / ViewState
//! ```

mod entry;
mod error;
mod state;
mod store;

pub use entry::Entry;
pub use error::HistoryError;
pub use state::HistoryState;
pub use store::HistoryStore;
