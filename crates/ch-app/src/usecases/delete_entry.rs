use std::sync::Arc;

use anyhow::Result;
use ch_core::Entry;
use tracing::info;

use crate::history_service::HistoryService;

pub struct DeleteEntry {
    history: Arc<HistoryService>,
}

impl DeleteEntry {
    pub fn new(history: Arc<HistoryService>) -> Self {
        Self { history }
    }

    /// Removes the entry at `index` along with its pin and returns it.
    #[tracing::instrument(name = "usecase.delete_entry.execute", skip(self))]
    pub async fn execute(&self, index: usize) -> Result<Entry> {
        let entry = self.history.delete_at(index).await?;
        info!("entry deleted");
        Ok(entry)
    }
}
