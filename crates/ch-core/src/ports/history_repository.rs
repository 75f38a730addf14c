use async_trait::async_trait;

use crate::history::{HistoryError, HistoryState};

/// Durable storage of the history state.
///
/// # Behavior
///
/// - `load()` of a store that was never written returns an empty state.
/// - `save()` is all-or-nothing: a reader observes either the previous or
///   the new state, never a partial write. Concurrent savers race with
///   last-writer-wins semantics.
#[async_trait]
pub trait HistoryRepositoryPort: Send + Sync {
    async fn load(&self) -> Result<HistoryState, HistoryError>;
    async fn save(&self, state: &HistoryState) -> Result<(), HistoryError>;
}
