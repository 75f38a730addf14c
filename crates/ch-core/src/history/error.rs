use thiserror::Error;

/// Errors surfaced by the history engine and its persistence adapters.
///
/// None of these are fatal to the process. The capture loop logs them and
/// keeps running; interactive actions report them and leave state unchanged.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("clipboard content is empty or whitespace")]
    EmptyContent,

    #[error("entry not found in history")]
    NotFound,

    #[error("index {index} out of range (history has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("history file is corrupt: {0}")]
    CorruptState(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl HistoryError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
