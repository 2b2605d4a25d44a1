//! Step server entry point.

use life_server::config::ServerConfig;
use life_server::server::start_server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ServerConfig::from_env()?;
    info!(host = config.host, port = config.port, "life-server starting");

    start_server(&config).await?;
    Ok(())
}
