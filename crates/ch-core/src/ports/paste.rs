use anyhow::Result;
use async_trait::async_trait;

/// Sends a paste keystroke to the foreground application.
///
/// Only the paste action uses it; none of the history invariants depend on it.
#[async_trait]
pub trait PasteInjectorPort: Send + Sync {
    async fn simulate_paste(&self) -> Result<()>;
}
