//! One use case per user action.
//!
//! Indices are positions in the ordered view (pinned entries first), the
//! same numbering `list`, `search` and the picker show.

pub mod capture_once;
pub mod clear_history;
pub mod copy_entry;
pub mod delete_entry;
pub mod list_history;
pub mod paste_entry;
pub mod search_history;
pub mod toggle_pin;
pub mod update_config;

pub use capture_once::CaptureOnce;
pub use clear_history::ClearHistory;
pub use copy_entry::CopyEntry;
pub use delete_entry::DeleteEntry;
pub use list_history::{HistoryItem, ListHistory};
pub use paste_entry::PasteEntry;
pub use search_history::{SearchHistory, SearchHit};
pub use toggle_pin::TogglePin;
pub use update_config::UpdateConfig;
