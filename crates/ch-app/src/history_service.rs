use std::sync::Arc;

use ch_core::ports::HistoryRepositoryPort;
use ch_core::{Entry, HistoryError, HistoryStore};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Session owner of the clipboard history.
///
/// One instance is shared (behind an `Arc`) by the capture loop and every
/// user action. Each mutation holds the lock across reload, change and save,
/// so in-process callers never observe or persist a half-applied action.
///
/// The history file may be written by other processes (the daemon and
/// one-shot commands run side by side). Every mutation therefore starts from
/// the state currently on disk, never from a copy loaded earlier, so a
/// finished action of another process is not overwritten by a stale one.
/// When the reload or the save fails nothing is persisted and the error is
/// returned.
pub struct HistoryService {
    store: Mutex<HistoryStore>,
    repo: Arc<dyn HistoryRepositoryPort>,
}

impl HistoryService {
    pub fn new(store: HistoryStore, repo: Arc<dyn HistoryRepositoryPort>) -> Self {
        Self {
            store: Mutex::new(store),
            repo,
        }
    }

    /// Loads the persisted history and applies `max_history` to it.
    #[tracing::instrument(name = "history.load", skip(repo))]
    pub async fn load(
        repo: Arc<dyn HistoryRepositoryPort>,
        max_history: usize,
    ) -> Result<Self, HistoryError> {
        let state = repo.load().await?;
        let store = HistoryStore::new(state, max_history);
        debug!(entries = store.len(), "history session started");
        Ok(Self::new(store, repo))
    }

    /// Re-reads the history file so later reads see other writers' changes.
    pub async fn refresh(&self) -> Result<(), HistoryError> {
        let mut store = self.store.lock().await;
        self.reload(&mut store).await
    }

    pub async fn ordered_view(&self) -> Vec<Entry> {
        self.store.lock().await.ordered_view()
    }

    /// Ordered view paired with each entry's pin flag, read under one lock.
    pub async fn ordered_items(&self) -> Vec<(Entry, bool)> {
        let store = self.store.lock().await;
        store
            .ordered_view()
            .into_iter()
            .map(|entry| {
                let pinned = store.is_pinned(entry.text());
                (entry, pinned)
            })
            .collect()
    }

    pub async fn head(&self) -> Option<Entry> {
        self.store.lock().await.head().cloned()
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    pub async fn is_pinned(&self, text: &str) -> bool {
        self.store.lock().await.is_pinned(text)
    }

    pub async fn entry_at(&self, index: usize) -> Result<Entry, HistoryError> {
        self.store.lock().await.entry_at(index)
    }

    /// See [`HistoryStore::ingest`]. Persists only when the history changed.
    pub async fn ingest(&self, text: &str) -> Result<bool, HistoryError> {
        let mut store = self.store.lock().await;
        self.apply(&mut store, |store| {
            store.ingest(text).map(|changed| (changed, changed))
        })
        .await
    }

    pub async fn toggle_pin(&self, text: &str) -> Result<bool, HistoryError> {
        let mut store = self.store.lock().await;
        self.apply(&mut store, |store| {
            store.toggle_pin(text).map(|pinned| (pinned, true))
        })
        .await
    }

    /// Toggles the pin of the entry at `index` in the view this session last
    /// showed. Resolution and mutation happen under one lock; the entry is
    /// matched by text in the reloaded state.
    pub async fn toggle_pin_at(&self, index: usize) -> Result<(Entry, bool), HistoryError> {
        let mut store = self.store.lock().await;
        let entry = store.entry_at(index)?;
        let pinned = self
            .apply(&mut store, |store| {
                store.toggle_pin(entry.text()).map(|pinned| (pinned, true))
            })
            .await?;
        Ok((entry, pinned))
    }

    /// Deletes the entry at `index` of the last shown view, see
    /// [`HistoryService::toggle_pin_at`]. Returns `NotFound` when another
    /// writer already removed it.
    pub async fn delete_at(&self, index: usize) -> Result<Entry, HistoryError> {
        let mut store = self.store.lock().await;
        let entry = store.entry_at(index)?;
        self.apply(&mut store, |store| {
            if store.delete(entry.text()) {
                Ok(((), true))
            } else {
                Err(HistoryError::NotFound)
            }
        })
        .await?;
        Ok(entry)
    }

    pub async fn clear(&self) -> Result<(), HistoryError> {
        let mut store = self.store.lock().await;
        self.apply(&mut store, |store| {
            store.clear();
            Ok(((), true))
        })
        .await
    }

    /// Changes the capacity, trimming and persisting right away. Returns how
    /// many entries were evicted.
    pub async fn set_max_history(&self, max_history: usize) -> Result<usize, HistoryError> {
        let mut store = self.store.lock().await;
        self.apply(&mut store, |store| {
            let evicted = store.set_max_history(max_history);
            Ok((evicted, evicted > 0))
        })
        .await
    }

    async fn reload(&self, store: &mut HistoryStore) -> Result<(), HistoryError> {
        let state = self.repo.load().await?;
        *store = HistoryStore::new(state, store.max_history());
        Ok(())
    }

    /// Reloads, then runs `f` on the fresh state. `f` returns its result plus
    /// whether the state changed; only changed states are saved.
    async fn apply<T, F>(&self, store: &mut HistoryStore, f: F) -> Result<T, HistoryError>
    where
        F: FnOnce(&mut HistoryStore) -> Result<(T, bool), HistoryError>,
    {
        if let Err(err) = self.reload(store).await {
            warn!(error = %err, "history reload failed, action skipped");
            return Err(err);
        }
        let snapshot = store.state().clone();

        let (value, changed) = f(store)?;
        if !changed {
            return Ok(value);
        }

        if let Err(err) = self.repo.save(store.state()).await {
            warn!(error = %err, "history save failed, rolling back");
            store.restore(snapshot);
            return Err(err);
        }
        Ok(value)
    }
}
