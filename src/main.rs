use anyhow::Context;
use clap::Parser;
use sentiment_hue::{cli, config::Config, server};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let config = Config::load(Some(cli.overrides()));

    if let Some(addr_argument) = cli.server.as_ref() {
        let addr = server::resolve_address(addr_argument.as_deref(), &config)?;
        server::start_server(addr, &config).await?;
    } else if !cli.labels.is_empty() {
        cli::run(cli, &config)?;
    } else {
        tracing::error!("Please provide one or more labels or start the server with --server.");
    }

    Ok(())
}
