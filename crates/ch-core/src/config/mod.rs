//! History engine configuration.
//!
//! Loading is the infrastructure layer's job; this module only owns the
//! bounds and defaults and turns raw values into a valid [`HistoryConfig`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_HISTORY: usize = 500;
pub const MIN_MAX_HISTORY: usize = 10;
pub const MAX_MAX_HISTORY: usize = 10_000;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 300;
pub const MIN_POLL_INTERVAL_MS: u64 = 50;
pub const MAX_POLL_INTERVAL_MS: u64 = 5_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but is not valid TOML or has mistyped keys.
    #[error("invalid config file {path}: {message}")]
    Invalid { path: String, message: String },

    #[error("config value out of range: {key} = {value}")]
    OutOfRange { key: &'static str, value: i64 },
}

/// Settings consumed by the history engine and the capture loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Capacity of the history; pinned entries are never evicted to honor it.
    pub max_history: usize,

    /// Clipboard sampling period of the capture loop.
    #[serde(rename = "poll_ms")]
    pub poll_interval_ms: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl HistoryConfig {
    /// Builds a config from untrusted values, falling back to defaults for
    /// missing ones and clamping the rest into their allowed ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use ch_core::HistoryConfig;
    ///
    /// let config = HistoryConfig::from_raw(Some(3), None);
    /// assert_eq!(config.max_history, 10);
    /// assert_eq!(config.poll_interval_ms, 300);
    /// ```
    pub fn from_raw(max_history: Option<i64>, poll_interval_ms: Option<i64>) -> Self {
        let defaults = Self::default();
        Self {
            max_history: max_history
                .map(|v| v.clamp(MIN_MAX_HISTORY as i64, MAX_MAX_HISTORY as i64) as usize)
                .unwrap_or(defaults.max_history),
            poll_interval_ms: poll_interval_ms
                .map(|v| v.clamp(MIN_POLL_INTERVAL_MS as i64, MAX_POLL_INTERVAL_MS as i64) as u64)
                .unwrap_or(defaults.poll_interval_ms),
        }
    }

    /// Applies user-supplied overrides, keeping current values for `None`.
    ///
    /// Unlike [`HistoryConfig::from_raw`] this rejects out-of-range values
    /// instead of clamping them.
    pub fn with_overrides(
        self,
        max_history: Option<i64>,
        poll_interval_ms: Option<i64>,
    ) -> Result<Self, ConfigError> {
        check_range("max_history", max_history, MIN_MAX_HISTORY as i64, MAX_MAX_HISTORY as i64)?;
        check_range(
            "poll_ms",
            poll_interval_ms,
            MIN_POLL_INTERVAL_MS as i64,
            MAX_POLL_INTERVAL_MS as i64,
        )?;
        Ok(Self {
            max_history: max_history.map_or(self.max_history, |v| v as usize),
            poll_interval_ms: poll_interval_ms.map_or(self.poll_interval_ms, |v| v as u64),
        })
    }

    pub fn clamped(self) -> Self {
        Self {
            max_history: self.max_history.clamp(MIN_MAX_HISTORY, MAX_MAX_HISTORY),
            poll_interval_ms: self
                .poll_interval_ms
                .clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn check_range(key: &'static str, value: Option<i64>, min: i64, max: i64) -> Result<(), ConfigError> {
    match value {
        Some(v) if !(min..=max).contains(&v) => Err(ConfigError::OutOfRange { key, value: v }),
        _ => Ok(()),
    }
}
