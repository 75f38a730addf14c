use std::collections::HashSet;

use super::{Entry, HistoryError, HistoryState};

/// In-memory owner of the clipboard history.
///
/// The store applies the capture rules (dedup, move-to-front) and the
/// pin-preserving retention policy. It performs no I/O; callers persist
/// [`HistoryStore::state`] after every successful mutation.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    state: HistoryState,
    max_history: usize,
}

impl HistoryStore {
    /// Wraps a loaded state.
    ///
    /// The state is normalized and trimmed immediately so a history written
    /// under a larger `max_history` never gets saved back above the limit.
    pub fn new(state: HistoryState, max_history: usize) -> Self {
        let mut store = Self {
            state: state.normalized(),
            max_history,
        };
        store.apply_retention();
        store
    }

    pub fn empty(max_history: usize) -> Self {
        Self::new(HistoryState::default(), max_history)
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// Replaces the whole state, e.g. to roll back after a failed save.
    pub fn restore(&mut self, state: HistoryState) {
        self.state = state;
    }

    pub fn entries(&self) -> &[Entry] {
        &self.state.entries
    }

    pub fn len(&self) -> usize {
        self.state.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.entries.is_empty()
    }

    /// Most recently captured or promoted entry.
    pub fn head(&self) -> Option<&Entry> {
        self.state.entries.first()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.state.position(text).is_some()
    }

    pub fn is_pinned(&self, text: &str) -> bool {
        self.state.is_pinned(text)
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Changes the capacity and trims right away. Returns the number of evicted entries.
    pub fn set_max_history(&mut self, max_history: usize) -> usize {
        self.max_history = max_history;
        self.apply_retention()
    }

    /// Folds captured text into the history.
    ///
    /// - already at position 0: no-op, returns `false`
    /// - present further down: moved to the front, returns `true`
    /// - absent: inserted at the front, returns `true`
    ///
    /// Retention runs after every change.
    ///
    /// # Errors
    ///
    /// [`HistoryError::EmptyContent`] when `text` is empty or whitespace only.
    pub fn ingest(&mut self, text: &str) -> Result<bool, HistoryError> {
        if text.trim().is_empty() {
            return Err(HistoryError::EmptyContent);
        }

        match self.state.position(text) {
            Some(0) => return Ok(false),
            Some(i) => {
                let entry = self.state.entries.remove(i);
                self.state.entries.insert(0, entry);
            }
            None => self.state.entries.insert(0, Entry::new(text)),
        }

        self.apply_retention();
        Ok(true)
    }

    /// Flips the pin flag of an existing entry and returns the new state.
    ///
    /// # Errors
    ///
    /// [`HistoryError::NotFound`] when `text` is not in the history. Pinning
    /// content that was never captured is rejected rather than recorded.
    pub fn toggle_pin(&mut self, text: &str) -> Result<bool, HistoryError> {
        if !self.contains(text) {
            return Err(HistoryError::NotFound);
        }

        if self.state.pinned.remove(text) {
            Ok(false)
        } else {
            self.state.pinned.insert(text.to_owned());
            Ok(true)
        }
    }

    /// Removes `text` from the entries and the pin set.
    ///
    /// Returns whether it was present in the entries.
    pub fn delete(&mut self, text: &str) -> bool {
        self.state.pinned.remove(text);
        match self.state.position(text) {
            Some(i) => {
                self.state.entries.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.state.entries.clear();
        self.state.pinned.clear();
    }

    /// Pinned entries first, then unpinned ones, each group in history order.
    ///
    /// This is the list the picker, the CLI indices and search operate on.
    pub fn ordered_view(&self) -> Vec<Entry> {
        let (pinned, unpinned): (Vec<&Entry>, Vec<&Entry>) = self
            .state
            .entries
            .iter()
            .partition(|e| self.state.is_pinned(e.text()));

        pinned.into_iter().chain(unpinned).cloned().collect()
    }

    /// Entry at `index` in the [ordered view](Self::ordered_view).
    pub fn entry_at(&self, index: usize) -> Result<Entry, HistoryError> {
        let view = self.ordered_view();
        let len = view.len();
        view.into_iter()
            .nth(index)
            .ok_or(HistoryError::IndexOutOfRange { index, len })
    }

    /// Trims the history down to `max_history` entries.
    ///
    /// All pinned entries are kept; the remaining slots go to the most recent
    /// unpinned entries. Surviving entries keep their relative order, so the
    /// head stays the latest capture. When more entries are pinned than the
    /// capacity allows, every pinned entry survives and no unpinned one does.
    fn apply_retention(&mut self) -> usize {
        self.state.prune_orphan_pins();

        let len = self.state.entries.len();
        if len <= self.max_history {
            return 0;
        }

        let pinned_count = self
            .state
            .entries
            .iter()
            .filter(|e| self.state.is_pinned(e.text()))
            .count();
        let unpinned_slots = self.max_history.saturating_sub(pinned_count);

        let kept_unpinned: HashSet<String> = self
            .state
            .entries
            .iter()
            .filter(|e| !self.state.is_pinned(e.text()))
            .take(unpinned_slots)
            .map(|e| e.text().to_owned())
            .collect();

        let pinned = &self.state.pinned;
        self.state
            .entries
            .retain(|e| pinned.contains(e.text()) || kept_unpinned.contains(e.text()));

        let evicted = len - self.state.entries.len();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            evicted,
            pinned = pinned_count,
            max_history = self.max_history,
            "history trimmed"
        );

        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(texts: &[&str], max_history: usize) -> HistoryStore {
        let entries = texts.iter().map(|t| Entry::new(*t)).collect();
        HistoryStore::new(HistoryState::new(entries, Default::default()), max_history)
    }

    fn texts(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(Entry::text).collect()
    }

    #[test]
    fn ingest_inserts_new_text_at_front() {
        let mut store = store_with(&["a", "b"], 10);
        assert!(store.ingest("c").unwrap());
        assert_eq!(texts(store.entries()), vec!["c", "a", "b"]);
    }

    #[test]
    fn ingest_moves_existing_text_to_front() {
        let mut store = store_with(&["a", "b", "c"], 10);
        assert!(store.ingest("b").unwrap());
        assert_eq!(texts(store.entries()), vec!["b", "a", "c"]);
    }

    #[test]
    fn ingest_of_head_is_a_no_op() {
        let mut store = store_with(&["a", "b"], 10);
        assert!(!store.ingest("a").unwrap());
        assert_eq!(texts(store.entries()), vec!["a", "b"]);
    }

    #[test]
    fn ingest_twice_is_idempotent() {
        let mut store = store_with(&["a", "b"], 10);
        assert!(store.ingest("x").unwrap());
        let view = store.ordered_view();
        assert!(!store.ingest("x").unwrap());
        assert_eq!(store.ordered_view(), view);
    }

    #[test]
    fn ingest_rejects_blank_text() {
        let mut store = store_with(&["a"], 10);
        assert!(matches!(store.ingest("   \n"), Err(HistoryError::EmptyContent)));
        assert!(matches!(store.ingest(""), Err(HistoryError::EmptyContent)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ingest_keeps_surrounding_whitespace_of_text() {
        let mut store = HistoryStore::empty(10);
        store.ingest("  padded  ").unwrap();
        assert_eq!(store.head().unwrap().text(), "  padded  ");
    }

    #[test]
    fn ingest_never_produces_duplicates() {
        let mut store = HistoryStore::empty(10);
        for text in ["a", "b", "a", "c", "b", "b", "a", "d"] {
            store.ingest(text).unwrap();
        }
        let mut seen = std::collections::HashSet::new();
        assert!(store.entries().iter().all(|e| seen.insert(e.text())));
        assert_eq!(texts(store.entries()), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn retention_keeps_pinned_entry_and_most_recent_unpinned() {
        let mut store = store_with(&["a", "b", "c"], 3);
        store.toggle_pin("a").unwrap();
        store.ingest("d").unwrap();

        assert_eq!(store.len(), 3);
        assert!(store.contains("a"));
        assert!(store.contains("d"));
        assert!(store.contains("b"));
        assert!(!store.contains("c"));
    }

    #[test]
    fn retention_with_pinned_tail_entry_drops_oldest_unpinned() {
        // [a*, b, c, d] loaded with capacity 3, then one more capture.
        let mut store = store_with(&["a", "b", "c", "d"], 10);
        store.toggle_pin("a").unwrap();
        store.set_max_history(3);
        assert_eq!(texts(&store.ordered_view()), vec!["a", "b", "c"]);

        store.ingest("e").unwrap();
        assert_eq!(texts(&store.ordered_view()), vec!["a", "e", "b"]);
        assert!(store.is_pinned("a"));
    }

    #[test]
    fn retention_never_evicts_pinned_entries() {
        let mut store = HistoryStore::empty(3);
        store.ingest("old").unwrap();
        store.toggle_pin("old").unwrap();
        for i in 0..20 {
            store.ingest(&format!("item-{i}")).unwrap();
            assert!(store.contains("old"));
            assert!(store.len() <= 3);
        }
    }

    #[test]
    fn retention_keeps_every_pin_when_pins_exceed_capacity() {
        let mut store = store_with(&["a", "b", "c"], 10);
        for t in ["a", "b", "c"] {
            store.toggle_pin(t).unwrap();
        }
        store.set_max_history(2);
        assert_eq!(store.len(), 3);

        store.ingest("d").unwrap();
        assert!(!store.contains("d"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn new_trims_oversized_state() {
        let store = store_with(&["a", "b", "c", "d", "e"], 3);
        assert_eq!(texts(store.entries()), vec!["a", "b", "c"]);
    }

    #[test]
    fn toggle_pin_flips_state() {
        let mut store = store_with(&["a"], 10);
        assert!(store.toggle_pin("a").unwrap());
        assert!(store.is_pinned("a"));
        assert!(!store.toggle_pin("a").unwrap());
        assert!(!store.is_pinned("a"));
    }

    #[test]
    fn toggle_pin_of_unknown_text_is_not_found() {
        let mut store = store_with(&["a"], 10);
        assert!(matches!(store.toggle_pin("zzz"), Err(HistoryError::NotFound)));
        assert!(store.state().pinned.is_empty());
    }

    #[test]
    fn delete_removes_entry_and_pin() {
        let mut store = store_with(&["a", "b"], 10);
        store.toggle_pin("b").unwrap();
        assert!(store.delete("b"));
        assert!(!store.contains("b"));
        assert!(!store.is_pinned("b"));
        assert!(!store.delete("b"));
    }

    #[test]
    fn clear_empties_entries_and_pins() {
        let mut store = store_with(&["a", "b"], 10);
        store.toggle_pin("a").unwrap();
        store.clear();
        assert!(store.is_empty());
        assert!(store.state().pinned.is_empty());
    }

    #[test]
    fn ordered_view_puts_pins_first_in_history_order() {
        let mut store = store_with(&["a", "b", "c", "d"], 10);
        store.toggle_pin("d").unwrap();
        store.toggle_pin("b").unwrap();
        assert_eq!(texts(&store.ordered_view()), vec!["b", "d", "a", "c"]);
        // raw order is untouched
        assert_eq!(texts(store.entries()), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn entry_at_indexes_the_ordered_view() {
        let mut store = store_with(&["a", "b"], 10);
        store.toggle_pin("b").unwrap();
        assert_eq!(store.entry_at(0).unwrap().text(), "b");
        assert!(matches!(
            store.entry_at(2),
            Err(HistoryError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }
}
