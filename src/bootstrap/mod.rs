pub mod tracing;
pub mod wiring;

pub use self::tracing::{init_tracing_subscriber, ConsoleTarget};
pub use wiring::{resolve_app_paths, AppContext};
