//! Tracing setup for the `cliphistory` binary.
//!
//! - console layer: stdout for the daemon, stderr (warnings only) for
//!   one-shot commands so their output stays clean
//! - file layer: `<data dir>/logs/cliphistory.log`, everything the filter lets through
//! - `RUST_LOG` overrides the default directives

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    filter::LevelFilter, fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter,
};

pub const LOG_FILE_NAME: &str = "cliphistory.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Where human-facing log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    /// Long-running daemon: full log on stdout.
    Stdout,
    /// One-shot command: warnings and errors on stderr.
    Stderr,
}

fn is_development() -> bool {
    cfg!(debug_assertions)
}

fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("ch_app={level}"),
        format!("ch_infra={level}"),
        format!("ch_platform={level}"),
        // arboard logs every X11 selection request at debug
        "arboard=warn".to_string(),
    ]
}

/// Installs the global subscriber. Call once, before the first log line.
///
/// A log directory that cannot be created only disables the file layer.
pub fn init_tracing_subscriber(logs_dir: &Path, console: ConsoleTarget) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_development()).join(",")));

    let (console_writer, console_level) = match console {
        ConsoleTarget::Stdout => (BoxMakeWriter::new(io::stdout), LevelFilter::TRACE),
        ConsoleTarget::Stderr => (BoxMakeWriter::new(io::stderr), LevelFilter::WARN),
    };

    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(console_writer)
        .with_filter(console_level);

    let file_layer = match build_file_writer(logs_dir) {
        Ok(writer) => Some(
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                ))
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer),
        ),
        Err(err) => {
            eprintln!("Failed to initialize file logging: {err}");
            None
        }
    };

    registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
