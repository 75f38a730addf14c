//! # ch-platform
//!
//! Operating system adapters for the ports declared in `ch-core`.

pub mod app_dirs;
pub mod clipboard;
pub mod paste;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::ArboardClipboard;
pub use paste::{CommandPasteInjector, PasteBackend};
