mod bootstrap;
mod cli;

use anyhow::Result;
use ch_platform::DirsAppDirsAdapter;
use clap::Parser;

use bootstrap::{init_tracing_subscriber, resolve_app_paths, AppContext, ConsoleTarget};
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = resolve_app_paths(&DirsAppDirsAdapter::new())?;

    let console = if cli.command.is_daemon() {
        ConsoleTarget::Stdout
    } else {
        ConsoleTarget::Stderr
    };
    if let Err(err) = init_tracing_subscriber(&paths.logs_dir, console) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let ctx = AppContext::load(paths).await?;
    cli::run(cli.command, ctx).await
}
