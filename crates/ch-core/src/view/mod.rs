//! Picker state machine.
//!
//! The picker never mutates history directly. It keeps a query, the filtered
//! indices into the ordered view and a selection cursor; both transitions are
//! pure functions returning the next state.

use crate::history::Entry;
use crate::search;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    /// Indices into the entry list the state was built from, best match first.
    pub filtered: Vec<usize>,
    /// Cursor position inside `filtered`.
    pub selected: usize,
}

impl ViewState {
    /// Unfiltered state over `entries` with the cursor on the first row.
    pub fn new(entries: &[Entry]) -> Self {
        Self {
            query: String::new(),
            filtered: (0..entries.len()).collect(),
            selected: 0,
        }
    }

    /// Index into the entry list of the selected row, if any row is visible.
    pub fn selected_index(&self) -> Option<usize> {
        self.filtered.get(self.selected).copied()
    }

    pub fn selected_entry<'a>(&self, entries: &'a [Entry]) -> Option<&'a Entry> {
        self.selected_index().and_then(|i| entries.get(i))
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Re-runs the search for `query`.
///
/// The cursor stays where it was when neither the query nor the matching rows
/// changed (re-submitting the same filter); otherwise it returns to the top.
pub fn apply_filter(state: &ViewState, entries: &[Entry], query: &str) -> ViewState {
    let filtered: Vec<usize> = search::rank_scored(entries, query)
        .into_iter()
        .map(|ranked| ranked.index)
        .collect();

    let selected = if state.query == query && state.filtered == filtered {
        state.selected
    } else {
        0
    };

    ViewState {
        query: query.to_owned(),
        filtered,
        selected,
    }
}

/// Moves the cursor by `delta` rows, stopping at the first and last row.
pub fn move_selection(state: &ViewState, delta: isize) -> ViewState {
    let last = state.filtered.len().saturating_sub(1);
    let selected = state.selected.saturating_add_signed(delta).min(last);

    ViewState {
        selected,
        ..state.clone()
    }
}
