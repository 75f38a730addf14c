use std::sync::Arc;

use anyhow::{Context, Result};
use ch_core::ports::ClipboardSourcePort;
use ch_core::HistoryError;
use tracing::info;

use crate::history_service::HistoryService;

/// Reads the clipboard once and stores its text.
pub struct CaptureOnce {
    clipboard: Arc<dyn ClipboardSourcePort>,
    history: Arc<HistoryService>,
}

impl CaptureOnce {
    pub fn new(clipboard: Arc<dyn ClipboardSourcePort>, history: Arc<HistoryService>) -> Self {
        Self { clipboard, history }
    }

    /// Returns whether the history changed. An empty clipboard is an error
    /// ([`HistoryError::EmptyContent`]) rather than a silent no-op.
    #[tracing::instrument(name = "usecase.capture_once.execute", skip(self))]
    pub async fn execute(&self) -> Result<bool> {
        let text = self
            .clipboard
            .read_text()
            .await
            .context("read clipboard failed")?;

        if text.trim().is_empty() {
            return Err(HistoryError::EmptyContent.into());
        }

        let changed = self.history.ingest(&text).await?;
        info!(changed, "clipboard saved to history");
        Ok(changed)
    }
}
