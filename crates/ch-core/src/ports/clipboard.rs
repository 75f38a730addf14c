//! Clipboard port - abstracts system clipboard access

use anyhow::Result;
use async_trait::async_trait;

/// Text access to the live system clipboard.
///
/// Implemented by the platform layer. The history engine never owns the
/// clipboard; it only samples it and writes selected entries back.
#[async_trait]
pub trait ClipboardSourcePort: Send + Sync {
    /// Read the current clipboard text.
    ///
    /// Non-text content and an empty clipboard may surface as an error or an
    /// empty string; callers treat both as "nothing to capture".
    async fn read_text(&self) -> Result<String>;

    /// Replace the clipboard content with `text`.
    async fn write_text(&self, text: &str) -> Result<()>;
}
