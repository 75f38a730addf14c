use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::history_service::HistoryService;

pub struct ClearHistory {
    history: Arc<HistoryService>,
}

impl ClearHistory {
    pub fn new(history: Arc<HistoryService>) -> Self {
        Self { history }
    }

    /// Drops every entry and pin. Returns how many entries were removed.
    #[tracing::instrument(name = "usecase.clear_history.execute", skip(self))]
    pub async fn execute(&self) -> Result<usize> {
        let removed = self.history.len().await;
        self.history.clear().await?;
        info!(removed, "history cleared");
        Ok(removed)
    }
}
