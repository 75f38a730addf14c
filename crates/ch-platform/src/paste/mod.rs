mod command;

pub use command::{CommandPasteInjector, PasteBackend};
