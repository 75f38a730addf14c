use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ch_core::ports::HistoryRepositoryPort;
use ch_core::{HistoryError, HistoryState};
use tokio::fs;
use tracing::{debug, warn};

use super::codec;
use crate::fs::atomic_write;

pub const HISTORY_FILE_NAME: &str = "clip_history.json";

/// JSON file backed history storage.
pub struct FileHistoryRepository {
    path: PathBuf,
}

impl FileHistoryRepository {
    /// Creates a repository that reads and writes the history file at `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ch_infra::FileHistoryRepository;
    ///
    /// let repo = FileHistoryRepository::new("/tmp/cliphistory/clip_history.json");
    /// assert!(repo.path().ends_with("clip_history.json"));
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository for the default file name inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(HISTORY_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryRepositoryPort for FileHistoryRepository {
    /// Reads the history file, accepting both the current record and the
    /// legacy bare-list format.
    ///
    /// A missing file is an empty history, not an error. Content matching
    /// neither format yields [`HistoryError::CorruptState`]; the file is
    /// left untouched so the caller can decide what to do with it.
    async fn load(&self) -> Result<HistoryState, HistoryError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file yet, starting empty");
                return Ok(HistoryState::default());
            }
            Err(e) => {
                return Err(HistoryError::io(
                    format!("read history failed: {}", self.path.display()),
                    e,
                ))
            }
        };

        let state = codec::decode(&content).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "history file is not decodable");
            HistoryError::CorruptState(format!("{}: {e}", self.path.display()))
        })?;

        debug!(
            path = %self.path.display(),
            entries = state.entries.len(),
            pinned = state.pinned.len(),
            "history loaded"
        );
        Ok(state)
    }

    /// Persists the state as pretty-printed JSON via temp file + rename.
    async fn save(&self, state: &HistoryState) -> Result<(), HistoryError> {
        let content = codec::encode(state)
            .map_err(|e| HistoryError::CorruptState(format!("serialize history failed: {e}")))?;

        atomic_write(&self.path, content.as_bytes())
            .await
            .map_err(|e| {
                HistoryError::io(format!("write history failed: {}", self.path.display()), e)
            })?;

        debug!(entries = state.entries.len(), "history saved");
        Ok(())
    }
}
