use std::sync::Arc;

use anyhow::{Context, Result};
use ch_core::ports::PasteInjectorPort;
use ch_core::Entry;

use super::CopyEntry;

/// Copies an entry and sends the paste keystroke to the focused window.
pub struct PasteEntry {
    copy: CopyEntry,
    paste: Arc<dyn PasteInjectorPort>,
}

impl PasteEntry {
    pub fn new(copy: CopyEntry, paste: Arc<dyn PasteInjectorPort>) -> Self {
        Self { copy, paste }
    }

    #[tracing::instrument(name = "usecase.paste_entry.execute", skip(self))]
    pub async fn execute(&self, index: usize) -> Result<Entry> {
        let entry = self.copy.execute(index).await?;
        self.paste
            .simulate_paste()
            .await
            .context("paste simulation failed")?;
        Ok(entry)
    }
}
