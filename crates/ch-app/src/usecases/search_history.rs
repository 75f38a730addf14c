use std::sync::Arc;

use ch_core::search::rank_scored;
use ch_core::Entry;

use crate::history_service::HistoryService;

/// A ranked match. `index` is the entry's position in the ordered view, so
/// it can be passed straight to copy, paste, pin or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub index: usize,
    pub entry: Entry,
    pub pinned: bool,
    pub score: u32,
}

pub struct SearchHistory {
    history: Arc<HistoryService>,
}

impl SearchHistory {
    pub fn new(history: Arc<HistoryService>) -> Self {
        Self { history }
    }

    #[tracing::instrument(name = "usecase.search_history.execute", skip(self))]
    pub async fn execute(&self, query: &str, limit: Option<usize>) -> Vec<SearchHit> {
        let items = self.history.ordered_items().await;
        let entries: Vec<Entry> = items.iter().map(|(entry, _)| entry.clone()).collect();

        rank_scored(&entries, query)
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|ranked| SearchHit {
                index: ranked.index,
                pinned: items[ranked.index].1,
                entry: ranked.entry,
                score: ranked.score,
            })
            .collect()
    }
}
