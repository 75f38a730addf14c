use std::sync::Arc;
use std::time::Duration;

use ch_core::ports::ClipboardSourcePort;
use ch_core::{Entry, HistoryError};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::history_service::HistoryService;

pub const LOG_PREVIEW_CHARS: usize = 80;

/// What a single sampling step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clipboard could not be read; logged, nothing changed.
    ReadFailed,
    /// Empty or whitespace-only content.
    Empty,
    /// Same content as the last successfully handled sample.
    Unchanged,
    /// The content is already the newest entry.
    AlreadyHead,
    /// New or promoted content was saved.
    Captured,
    /// Reloading or saving the history failed; the next tick retries the
    /// same content.
    SaveFailed,
}

/// Periodically samples the clipboard and folds new text into the history.
pub struct CaptureLoop {
    clipboard: Arc<dyn ClipboardSourcePort>,
    history: Arc<HistoryService>,
    interval: Duration,
    last_seen: Option<String>,
}

impl CaptureLoop {
    pub fn new(
        clipboard: Arc<dyn ClipboardSourcePort>,
        history: Arc<HistoryService>,
        interval: Duration,
    ) -> Self {
        Self {
            clipboard,
            history,
            interval,
            last_seen: None,
        }
    }

    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    /// One sampling step.
    ///
    /// `last_seen` only advances once the content is known to be stored,
    /// either because it already was the head or because the save succeeded.
    pub async fn tick(&mut self) -> TickOutcome {
        let text = match self.clipboard.read_text().await {
            Ok(text) => text,
            Err(err) => {
                debug!(error = %err, "clipboard read failed");
                return TickOutcome::ReadFailed;
            }
        };

        if text.trim().is_empty() {
            return TickOutcome::Empty;
        }
        if self.last_seen.as_deref() == Some(text.as_str()) {
            return TickOutcome::Unchanged;
        }

        match self.history.ingest(&text).await {
            Ok(false) => {
                self.last_seen = Some(text);
                TickOutcome::AlreadyHead
            }
            Ok(true) => {
                info!(
                    preview = %Entry::new(text.as_str()).preview(LOG_PREVIEW_CHARS),
                    "captured clipboard text"
                );
                self.last_seen = Some(text);
                TickOutcome::Captured
            }
            Err(HistoryError::EmptyContent) => TickOutcome::Empty,
            Err(err) => {
                warn!(error = %err, "failed to store captured text, will retry");
                TickOutcome::SaveFailed
            }
        }
    }

    /// Ticks until `shutdown` turns `true` or its sender is dropped.
    ///
    /// The signal is only observed between ticks; a running tick always
    /// finishes, including its save.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(interval_ms = self.interval.as_millis() as u64, "capture loop started");

        loop {
            if *shutdown.borrow() {
                break;
            }
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.tick().await;
                }
            }
        }

        info!("capture loop stopped");
    }
}
