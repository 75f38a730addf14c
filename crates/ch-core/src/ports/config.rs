use async_trait::async_trait;

use crate::config::HistoryConfig;

#[async_trait]
pub trait ConfigPort: Send + Sync {
    /// Load the config, returning defaults when nothing has been saved yet.
    async fn load(&self) -> anyhow::Result<HistoryConfig>;
    async fn save(&self, config: &HistoryConfig) -> anyhow::Result<()>;
}
