use std::collections::{BTreeSet, HashSet};

use super::Entry;

/// Persisted shape of the history: raw entry order plus the pin set.
///
/// `entries` is most-recent-first. `pinned` holds entry texts; a pin whose
/// text is no longer in `entries` is an orphan and is dropped by
/// [`HistoryState::normalized`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    pub entries: Vec<Entry>,
    pub pinned: BTreeSet<String>,
}

impl HistoryState {
    pub fn new(entries: Vec<Entry>, pinned: BTreeSet<String>) -> Self {
        Self { entries, pinned }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_pinned(&self, text: &str) -> bool {
        self.pinned.contains(text)
    }

    pub fn position(&self, text: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.text() == text)
    }

    /// Restores the uniqueness invariant on data read from disk.
    ///
    /// Duplicate texts keep their first (most recent) occurrence and pins
    /// that reference no entry are removed.
    pub fn normalized(mut self) -> Self {
        let mut seen = HashSet::with_capacity(self.entries.len());
        self.entries.retain(|e| seen.insert(e.text().to_owned()));
        self.prune_orphan_pins();
        self
    }

    /// Drops pins whose text is absent from `entries`. Returns how many were removed.
    pub fn prune_orphan_pins(&mut self) -> usize {
        let before = self.pinned.len();
        let present: HashSet<&str> = self.entries.iter().map(Entry::text).collect();
        self.pinned.retain(|text| present.contains(text.as_str()));
        before - self.pinned.len()
    }
}
