mod capture_loop;

pub use capture_loop::{CaptureLoop, TickOutcome, LOG_PREVIEW_CHARS};
