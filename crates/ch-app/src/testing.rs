//! Port doubles shared by the unit tests of this crate.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use ch_core::ports::{ClipboardSourcePort, HistoryRepositoryPort, PasteInjectorPort};
use ch_core::{Entry, HistoryError, HistoryState};
use mockall::mock;

mock! {
    pub HistoryRepo {}

    #[async_trait]
    impl HistoryRepositoryPort for HistoryRepo {
        async fn load(&self) -> Result<HistoryState, HistoryError>;
        async fn save(&self, state: &HistoryState) -> Result<(), HistoryError>;
    }
}

mock! {
    pub Clipboard {}

    #[async_trait]
    impl ClipboardSourcePort for Clipboard {
        async fn read_text(&self) -> anyhow::Result<String>;
        async fn write_text(&self, text: &str) -> anyhow::Result<()>;
    }
}

mock! {
    pub Paste {}

    #[async_trait]
    impl PasteInjectorPort for Paste {
        async fn simulate_paste(&self) -> anyhow::Result<()>;
    }
}

/// In-memory repository that records what was saved.
#[derive(Default)]
pub struct FakeHistoryRepository {
    state: Mutex<HistoryState>,
    saves: AtomicUsize,
    fail: AtomicBool,
}

impl FakeHistoryRepository {
    pub fn with_entries(texts: &[&str]) -> Self {
        Self::with_state(HistoryState::new(
            texts.iter().map(|t| Entry::new(*t)).collect(),
            BTreeSet::new(),
        ))
    }

    pub fn with_state(state: HistoryState) -> Self {
        Self {
            state: Mutex::new(state),
            ..Default::default()
        }
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn saved_state(&self) -> HistoryState {
        self.state.lock().unwrap().clone()
    }

    pub fn saved_texts(&self) -> Vec<String> {
        self.saved_state()
            .entries
            .into_iter()
            .map(Entry::into_text)
            .collect()
    }
}

#[async_trait]
impl HistoryRepositoryPort for FakeHistoryRepository {
    async fn load(&self) -> Result<HistoryState, HistoryError> {
        Ok(self.saved_state())
    }

    async fn save(&self, state: &HistoryState) -> Result<(), HistoryError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(HistoryError::io(
                "save history",
                std::io::Error::other("disk full"),
            ));
        }
        *self.state.lock().unwrap() = state.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Clipboard double whose content can be swapped between ticks.
#[derive(Default)]
pub struct FakeClipboard {
    content: Mutex<String>,
    read_error: Mutex<Option<String>>,
    writes: Mutex<Vec<String>>,
}

impl FakeClipboard {
    pub fn holding(text: &str) -> Self {
        let clipboard = Self::default();
        clipboard.set(text);
        clipboard
    }

    /// Replaces the content and clears any injected read error.
    pub fn set(&self, text: &str) {
        *self.content.lock().unwrap() = text.to_owned();
        *self.read_error.lock().unwrap() = None;
    }

    pub fn fail_reads(&self, message: &str) {
        *self.read_error.lock().unwrap() = Some(message.to_owned());
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipboardSourcePort for FakeClipboard {
    async fn read_text(&self) -> anyhow::Result<String> {
        if let Some(message) = self.read_error.lock().unwrap().clone() {
            return Err(anyhow::Error::msg(message));
        }
        Ok(self.content.lock().unwrap().clone())
    }

    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        self.set(text);
        self.writes.lock().unwrap().push(text.to_owned());
        Ok(())
    }
}
