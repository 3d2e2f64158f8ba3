//! Main entry point for the `koshelf` command.

use clap::Parser;
use koshelf_cli::{load_config, App, Cli, CliResult};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> CliResult<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "koshelf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    info!(config = %cli.config.display(), "Starting KoShelf CLI");

    let config = load_config(&cli.config, cli.base_url.as_deref()).await?;
    let app = App::from_config(&config)?;

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = app.run(&cli.command, &mut stdout).await {
        error!("Command failed: {}", e);
        return Err(e);
    }

    Ok(())
}
