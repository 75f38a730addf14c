//! Builds the adapters and the shared history session for one process.

use std::sync::Arc;

use anyhow::{Context, Result};
use ch_app::usecases::{
    CaptureOnce, ClearHistory, CopyEntry, DeleteEntry, ListHistory, PasteEntry, SearchHistory,
    TogglePin, UpdateConfig,
};
use ch_app::{AppPaths, CaptureLoop, HistoryService};
use ch_core::ports::{AppDirsPort, ClipboardSourcePort, ConfigPort, PasteInjectorPort};
use ch_core::HistoryConfig;
use ch_infra::{FileConfigRepository, FileHistoryRepository};
use ch_platform::{ArboardClipboard, CommandPasteInjector};
use tracing::warn;

/// Resolves the data and config locations. Failing here is fatal: without a
/// data directory there is nowhere to keep the history.
pub fn resolve_app_paths(dirs: &dyn AppDirsPort) -> Result<AppPaths> {
    let app_dirs = dirs
        .get_app_dirs()
        .context("cannot resolve a data directory for the clipboard history")?;
    Ok(AppPaths::from_app_dirs(&app_dirs))
}

/// Everything a command needs, wired once per process.
pub struct AppContext {
    pub paths: AppPaths,
    pub config: HistoryConfig,
    pub history: Arc<HistoryService>,
    config_repo: Arc<dyn ConfigPort>,
    clipboard: Arc<dyn ClipboardSourcePort>,
    paste: Arc<dyn PasteInjectorPort>,
}

impl AppContext {
    /// Loads config and history from `paths`.
    ///
    /// An unreadable config falls back to defaults with a warning; an
    /// unreadable history is an error so the file is never overwritten.
    pub async fn load(paths: AppPaths) -> Result<Self> {
        let config_repo: Arc<dyn ConfigPort> =
            Arc::new(FileConfigRepository::new(&paths.config_path));
        let config = match config_repo.load().await {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %format!("{err:#}"), "using default config");
                HistoryConfig::default()
            }
        };

        let history_repo = Arc::new(FileHistoryRepository::new(&paths.history_path));
        let history = HistoryService::load(history_repo, config.max_history)
            .await
            .with_context(|| format!("load history from {}", paths.history_path.display()))?;

        Ok(Self {
            paths,
            config,
            history: Arc::new(history),
            config_repo,
            clipboard: Arc::new(ArboardClipboard::new()),
            paste: Arc::new(CommandPasteInjector::default()),
        })
    }

    pub fn config_repo(&self) -> Arc<dyn ConfigPort> {
        self.config_repo.clone()
    }

    pub fn capture_loop(&self, config: &HistoryConfig) -> CaptureLoop {
        CaptureLoop::new(
            self.clipboard.clone(),
            self.history.clone(),
            config.poll_interval(),
        )
    }

    pub fn capture_once(&self) -> CaptureOnce {
        CaptureOnce::new(self.clipboard.clone(), self.history.clone())
    }

    pub fn list_history(&self) -> ListHistory {
        ListHistory::new(self.history.clone())
    }

    pub fn search_history(&self) -> SearchHistory {
        SearchHistory::new(self.history.clone())
    }

    pub fn copy_entry(&self) -> CopyEntry {
        CopyEntry::new(self.clipboard.clone(), self.history.clone())
    }

    pub fn paste_entry(&self) -> PasteEntry {
        PasteEntry::new(self.copy_entry(), self.paste.clone())
    }

    pub fn toggle_pin(&self) -> TogglePin {
        TogglePin::new(self.history.clone())
    }

    pub fn delete_entry(&self) -> DeleteEntry {
        DeleteEntry::new(self.history.clone())
    }

    pub fn clear_history(&self) -> ClearHistory {
        ClearHistory::new(self.history.clone())
    }

    pub fn update_config(&self) -> UpdateConfig {
        UpdateConfig::new(self.config_repo.clone(), self.history.clone())
    }
}
