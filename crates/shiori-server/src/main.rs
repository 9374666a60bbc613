use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shiori_api::anilist::AniListClient;
use shiori_server::{router, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

/// Anime and manga metadata API backed by AniList.
#[derive(Parser, Debug)]
#[command(name = "shiori", version)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(short, long, env = "SHIORI_CONFIG")]
    config: Option<PathBuf>,

    /// Listen host (overrides config)
    #[arg(long, env = "SHIORI_HOST")]
    host: Option<String>,

    /// Listen port (overrides config)
    #[arg(short, long, env = "SHIORI_PORT")]
    port: Option<u16>,

    /// GraphQL endpoint (overrides config)
    #[arg(long, env = "SHIORI_ENDPOINT")]
    endpoint: Option<Url>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref()).context("loading config")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(endpoint) = cli.endpoint {
        config.provider.endpoint = endpoint;
    }

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = AniListClient::with_endpoint(
        config.provider.endpoint.clone(),
        config.provider.timeout(),
    )
    .context("building AniList client")?;
    let app = router(AppState::new(client));

    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, endpoint = %config.provider.endpoint, "shiori listening");

    axum::serve(listener, app).await?;
    Ok(())
}
