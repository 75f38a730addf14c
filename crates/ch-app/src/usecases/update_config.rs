use std::sync::Arc;

use anyhow::Result;
use ch_core::ports::ConfigPort;
use ch_core::HistoryConfig;
use tracing::info;

use crate::history_service::HistoryService;

/// Changes persisted settings and applies the new capacity right away.
pub struct UpdateConfig {
    config: Arc<dyn ConfigPort>,
    history: Arc<HistoryService>,
}

impl UpdateConfig {
    pub fn new(config: Arc<dyn ConfigPort>, history: Arc<HistoryService>) -> Self {
        Self { config, history }
    }

    /// Returns the saved config and how many entries the new capacity evicted.
    #[tracing::instrument(name = "usecase.update_config.execute", skip(self))]
    pub async fn execute(
        &self,
        max_history: Option<i64>,
        poll_interval_ms: Option<i64>,
    ) -> Result<(HistoryConfig, usize)> {
        let current = self.config.load().await?;
        let updated = current.with_overrides(max_history, poll_interval_ms)?;
        self.config.save(&updated).await?;

        let evicted = self.history.set_max_history(updated.max_history).await?;
        info!(
            max_history = updated.max_history,
            poll_ms = updated.poll_interval_ms,
            evicted,
            "config updated"
        );
        Ok((updated, evicted))
    }
}
