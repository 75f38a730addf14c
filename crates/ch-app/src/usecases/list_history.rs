use std::sync::Arc;

use ch_core::Entry;

use crate::history_service::HistoryService;

/// A row of the ordered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub index: usize,
    pub entry: Entry,
    pub pinned: bool,
}

pub struct ListHistory {
    history: Arc<HistoryService>,
}

impl ListHistory {
    pub fn new(history: Arc<HistoryService>) -> Self {
        Self { history }
    }

    /// Ordered view, cut to `limit` rows when given.
    #[tracing::instrument(name = "usecase.list_history.execute", skip(self))]
    pub async fn execute(&self, limit: Option<usize>) -> Vec<HistoryItem> {
        self.history
            .ordered_items()
            .await
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .enumerate()
            .map(|(index, (entry, pinned))| HistoryItem {
                index,
                entry,
                pinned,
            })
            .collect()
    }
}
