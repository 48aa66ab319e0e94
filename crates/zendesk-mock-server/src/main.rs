use anyhow::Context;
use clap::Parser;
use zendesk_mock_server::app::AppState;
use zendesk_mock_server::cli::Cli;
use zendesk_mock_server::runtime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    runtime::init_tracing();

    let config = cli.resolve_config().context("failed to load config")?;
    tracing::info!(
        event = "startup",
        host = %config.host,
        port = config.port,
        api_prefix = %config.api_prefix,
        reject_status = config.reject_status,
        "Starting groups mock"
    );

    let state = AppState::new(&config).context("failed to build routes")?;
    let listener = runtime::bind(&config).await?;
    runtime::serve(listener, state, runtime::shutdown_signal()).await?;
    Ok(())
}
