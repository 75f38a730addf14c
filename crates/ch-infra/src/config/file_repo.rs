use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use ch_core::ports::ConfigPort;
use ch_core::{ConfigError, HistoryConfig};
use serde::Deserialize;
use tokio::fs;
use tracing::debug;

use crate::fs::atomic_write;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Keys as they appear in the file. Anything else in the file is ignored.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    max_history: Option<i64>,
    poll_ms: Option<i64>,
}

pub struct FileConfigRepository {
    path: PathBuf,
}

impl FileConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(config_dir: &Path) -> Self {
        Self::new(config_dir.join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigPort for FileConfigRepository {
    async fn load(&self) -> Result<HistoryConfig> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no config file, using defaults");
                return Ok(HistoryConfig::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read config failed: {}", self.path.display()))
            }
        };

        let raw: RawConfig = toml::from_str(&content).map_err(|e| ConfigError::Invalid {
            path: self.path.display().to_string(),
            message: e.message().to_owned(),
        })?;

        Ok(HistoryConfig::from_raw(raw.max_history, raw.poll_ms))
    }

    async fn save(&self, config: &HistoryConfig) -> Result<()> {
        let content = toml::to_string_pretty(config).context("serialize config failed")?;

        atomic_write(&self.path, content.as_bytes())
            .await
            .with_context(|| format!("write config failed: {}", self.path.display()))?;

        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}
