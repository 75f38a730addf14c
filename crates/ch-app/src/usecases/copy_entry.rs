use std::sync::Arc;

use anyhow::{Context, Result};
use ch_core::ports::ClipboardSourcePort;
use ch_core::Entry;
use tracing::info;

use crate::history_service::HistoryService;

/// Puts a history entry back on the clipboard.
pub struct CopyEntry {
    clipboard: Arc<dyn ClipboardSourcePort>,
    history: Arc<HistoryService>,
}

impl CopyEntry {
    pub fn new(clipboard: Arc<dyn ClipboardSourcePort>, history: Arc<HistoryService>) -> Self {
        Self { clipboard, history }
    }

    /// Writes the entry at `index` to the clipboard and promotes it to the
    /// head of the history, the same as if it had just been captured.
    ///
    /// The promotion is by text, so it always lands on the entry that was
    /// written even if the view shifted in between.
    #[tracing::instrument(name = "usecase.copy_entry.execute", skip(self))]
    pub async fn execute(&self, index: usize) -> Result<Entry> {
        let entry = self.history.entry_at(index).await?;

        self.clipboard
            .write_text(entry.text())
            .await
            .context("write clipboard failed")?;
        self.history.ingest(entry.text()).await?;

        info!("entry copied to clipboard");
        Ok(entry)
    }
}
