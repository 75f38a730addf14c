//! On-disk representation of the history.
//!
//! Current format:
//!
//! ```json
//! { "history": ["newest", "older"], "pinned": { "older": true } }
//! ```
//!
//! Older releases wrote a bare JSON array of strings; it still loads, as a
//! history without pins. Both shapes are normalized into [`HistoryState`]
//! right after decoding.

use std::collections::{BTreeMap, BTreeSet};

use ch_core::{Entry, HistoryState};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(deserialize_with = "null_as_empty")]
    pub history: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub pinned: BTreeMap<String, bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PersistedHistory {
    Record(HistoryRecord),
    Legacy(Vec<String>),
}

/// Writers that encode empty collections as `null` still produce a valid record.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&HistoryState> for HistoryRecord {
    fn from(state: &HistoryState) -> Self {
        Self {
            history: state.entries.iter().map(|e| e.text().to_owned()).collect(),
            pinned: state.pinned.iter().map(|p| (p.clone(), true)).collect(),
        }
    }
}

impl From<HistoryRecord> for HistoryState {
    fn from(record: HistoryRecord) -> Self {
        let pinned: BTreeSet<String> = record
            .pinned
            .into_iter()
            .filter_map(|(text, is_pinned)| is_pinned.then_some(text))
            .collect();
        HistoryState::new(record.history.into_iter().map(Entry::new).collect(), pinned)
            .normalized()
    }
}

pub fn encode(state: &HistoryState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&HistoryRecord::from(state))
}

/// Decodes either format. The error of a failed decode describes the
/// current record shape, which is what a user editing the file expects.
pub fn decode(content: &str) -> serde_json::Result<HistoryState> {
    match serde_json::from_str::<PersistedHistory>(content) {
        Ok(PersistedHistory::Record(record)) => Ok(record.into()),
        Ok(PersistedHistory::Legacy(history)) => Ok(HistoryRecord {
            history,
            pinned: BTreeMap::new(),
        }
        .into()),
        Err(_) => serde_json::from_str::<HistoryRecord>(content).map(Into::into),
    }
}
