use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use async_trait::async_trait;
use ch_core::ports::ClipboardSourcePort;
use tokio::task::spawn_blocking;
use tracing::trace;

/// System clipboard through `arboard`.
///
/// The context is created on first use, so commands that never touch the
/// clipboard work without a display. It is then kept for the adapter's
/// lifetime: on X11 the written selection is only served while it lives.
#[derive(Clone, Default)]
pub struct ArboardClipboard {
    inner: Arc<Mutex<Option<Clipboard>>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` against the lazily created context on the blocking pool.
    async fn with_clipboard<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Clipboard) -> Result<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        spawn_blocking(move || {
            let mut guard = inner
                .lock()
                .map_err(|_| anyhow!("clipboard mutex poisoned"))?;
            if guard.is_none() {
                *guard = Some(Clipboard::new().context("open system clipboard failed")?);
            }
            match guard.as_mut() {
                Some(clipboard) => f(clipboard),
                None => Err(anyhow!("system clipboard unavailable")),
            }
        })
        .await
        .context("clipboard task panicked")?
    }
}

#[async_trait]
impl ClipboardSourcePort for ArboardClipboard {
    /// Non-text or empty clipboards read as an empty string.
    async fn read_text(&self) -> Result<String> {
        self.with_clipboard(|clipboard| match clipboard.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => {
                trace!("clipboard holds no text");
                Ok(String::new())
            }
            Err(e) => Err(e).context("read clipboard text failed"),
        })
        .await
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_owned();
        self.with_clipboard(move |clipboard| {
            clipboard
                .set_text(text)
                .context("write clipboard text failed")
        })
        .await
    }
}
