use std::sync::Arc;

use anyhow::Result;
use ch_core::Entry;
use tracing::info;

use crate::history_service::HistoryService;

pub struct TogglePin {
    history: Arc<HistoryService>,
}

impl TogglePin {
    pub fn new(history: Arc<HistoryService>) -> Self {
        Self { history }
    }

    /// Flips the pin of the entry at `index`; returns it with its new pin state.
    #[tracing::instrument(name = "usecase.toggle_pin.execute", skip(self))]
    pub async fn execute(&self, index: usize) -> Result<(Entry, bool)> {
        let (entry, pinned) = self.history.toggle_pin_at(index).await?;
        info!(pinned, "pin toggled");
        Ok((entry, pinned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHistoryRepository;
    use ch_core::HistoryError;

    #[tokio::test]
    async fn toggles_and_moves_entry_into_pinned_group() {
        let repo = Arc::new(FakeHistoryRepository::with_entries(&["a", "b"]));
        let history = Arc::new(HistoryService::load(repo.clone(), 10).await.unwrap());
        let uc = TogglePin::new(history.clone());

        assert_eq!(uc.execute(1).await.unwrap(), (Entry::new("b"), true));
        assert!(repo.saved_state().is_pinned("b"));
        assert_eq!(history.entry_at(0).await.unwrap(), Entry::new("b"));

        assert_eq!(uc.execute(0).await.unwrap(), (Entry::new("b"), false));
        assert!(!repo.saved_state().is_pinned("b"));
    }

    #[tokio::test]
    async fn out_of_range_index_is_reported() {
        let repo = Arc::new(FakeHistoryRepository::with_entries(&["a"]));
        let history = Arc::new(HistoryService::load(repo, 10).await.unwrap());

        let err = TogglePin::new(history).execute(1).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HistoryError>(),
            Some(HistoryError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }
}
