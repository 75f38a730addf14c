use anyhow::{Context, Result};
use ch_core::Entry;
use tokio::sync::watch;
use tracing::{info, warn};

use super::{picker, Commands, ConfigAction};
use crate::bootstrap::AppContext;

/// `list` and `search` show the first line of each entry, cut to this many characters.
pub const LIST_PREVIEW_CHARS: usize = 120;

pub async fn run(command: Commands, ctx: AppContext) -> Result<()> {
    match command {
        Commands::Daemon { poll_ms } => run_daemon(&ctx, poll_ms).await,
        Commands::Save => {
            let changed = ctx.capture_once().execute().await?;
            if changed {
                println!("saved");
            } else {
                println!("already the latest entry");
            }
            Ok(())
        }
        Commands::List { limit } => {
            let items = ctx.list_history().execute(limit).await;
            if items.is_empty() {
                println!("history is empty");
            }
            for item in &items {
                println!("{}", format_row(item.index, &item.entry, item.pinned));
            }
            Ok(())
        }
        Commands::Search { query, limit } => {
            let hits = ctx.search_history().execute(&query, limit).await;
            if hits.is_empty() {
                println!("no matches for {query:?}");
            }
            for hit in &hits {
                println!("{}", format_row(hit.index, &hit.entry, hit.pinned));
            }
            Ok(())
        }
        Commands::Copy { index } => {
            let entry = ctx.copy_entry().execute(index).await?;
            println!("copied: {}", entry.preview(LIST_PREVIEW_CHARS));
            Ok(())
        }
        Commands::Paste { index } => {
            ctx.paste_entry().execute(index).await?;
            Ok(())
        }
        Commands::Pin { index } => {
            let (entry, pinned) = ctx.toggle_pin().execute(index).await?;
            let state = if pinned { "pinned" } else { "unpinned" };
            println!("{state}: {}", entry.preview(LIST_PREVIEW_CHARS));
            Ok(())
        }
        Commands::Delete { index } => {
            let entry = ctx.delete_entry().execute(index).await?;
            println!("deleted: {}", entry.preview(LIST_PREVIEW_CHARS));
            Ok(())
        }
        Commands::Clear => {
            let removed = ctx.clear_history().execute().await?;
            println!("cleared {removed} entries");
            Ok(())
        }
        Commands::Config { action } => run_config(&ctx, action).await,
        Commands::Pick => picker::run(&ctx).await,
    }
}

/// Runs the capture loop until Ctrl+C. A tick in progress finishes first.
async fn run_daemon(ctx: &AppContext, poll_ms: Option<i64>) -> Result<()> {
    let config = ctx.config.with_overrides(None, poll_ms)?;
    info!(
        history = %ctx.paths.history_path.display(),
        max_history = config.max_history,
        poll_ms = config.poll_interval_ms,
        "starting clipboard daemon"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let capture = ctx.capture_loop(&config);
    let handle = tokio::spawn(capture.run(shutdown_rx));

    tokio::signal::ctrl_c()
        .await
        .context("listen for Ctrl+C failed")?;
    info!("shutdown requested");

    if shutdown_tx.send(true).is_err() {
        warn!("capture loop already stopped");
    }
    handle.await.context("capture loop task failed")?;
    Ok(())
}

async fn run_config(ctx: &AppContext, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            // Reload so a broken file is reported here instead of silently defaulted.
            let config = ctx.config_repo().load().await?;
            println!("config_file = {}", ctx.paths.config_path.display());
            println!("history_file = {}", ctx.paths.history_path.display());
            println!("max_history = {}", config.max_history);
            println!("poll_ms = {}", config.poll_interval_ms);
        }
        ConfigAction::Set {
            max_history,
            poll_ms,
        } => {
            let (config, evicted) = ctx.update_config().execute(max_history, poll_ms).await?;
            println!("max_history = {}", config.max_history);
            println!("poll_ms = {}", config.poll_interval_ms);
            if evicted > 0 {
                println!("trimmed {evicted} entries to fit the new capacity");
            }
        }
    }
    Ok(())
}

/// `[i] preview`, with `*` after the index for pinned entries.
pub fn format_row(index: usize, entry: &Entry, pinned: bool) -> String {
    let marker = if pinned { "*" } else { " " };
    format!("[{index}]{marker} {}", entry.preview(LIST_PREVIEW_CHARS))
}
