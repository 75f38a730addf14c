use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use ch_core::ports::PasteInjectorPort;
use tokio::process::Command;
use tracing::debug;

/// Gives the target window time to regain focus before the keystroke.
pub const PASTE_DELAY: Duration = Duration::from_millis(30);

/// External tool used to synthesize the paste keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteBackend {
    /// `wtype`, for Wayland sessions.
    Wtype,
    /// `xdotool`, for X11 sessions.
    Xdotool,
}

impl PasteBackend {
    /// Wayland when `WAYLAND_DISPLAY` is set and non-empty, X11 otherwise.
    pub fn detect() -> Self {
        Self::for_wayland_display(std::env::var("WAYLAND_DISPLAY").ok().as_deref())
    }

    pub fn for_wayland_display(display: Option<&str>) -> Self {
        match display {
            Some(d) if !d.is_empty() => Self::Wtype,
            _ => Self::Xdotool,
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            Self::Wtype => "wtype",
            Self::Xdotool => "xdotool",
        }
    }

    /// Arguments sending Ctrl+V.
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::Wtype => &["-M", "ctrl", "v", "-m", "ctrl"],
            Self::Xdotool => &["key", "--clearmodifiers", "ctrl+v"],
        }
    }
}

/// Sends Ctrl+V to the focused window by spawning `wtype` or `xdotool`.
pub struct CommandPasteInjector {
    backend: PasteBackend,
    delay: Duration,
}

impl Default for CommandPasteInjector {
    fn default() -> Self {
        Self::new(PasteBackend::detect())
    }
}

impl CommandPasteInjector {
    pub fn new(backend: PasteBackend) -> Self {
        Self {
            backend,
            delay: PASTE_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn backend(&self) -> PasteBackend {
        self.backend
    }
}

#[async_trait]
impl PasteInjectorPort for CommandPasteInjector {
    async fn simulate_paste(&self) -> Result<()> {
        tokio::time::sleep(self.delay).await;

        let program = self.backend.program();
        debug!(program, "simulating paste keystroke");
        let status = Command::new(program)
            .args(self.backend.args())
            .status()
            .await
            .with_context(|| format!("failed to run {program}; is it installed?"))?;

        if !status.success() {
            bail!("{program} exited with {status}");
        }
        Ok(())
    }
}
