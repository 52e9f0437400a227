use std::{sync::Arc, time::Duration};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url_shortener::{build_router, config::AppConfig, server, AppState};

// ── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (ignore error if file is absent — env vars may already be set)
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "url_shortener=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env()?;
    tracing::info!("Starting URL shortener on {}", config.bind_addr());
    tracing::info!("Base URL: {}", config.base_url);
    if !config.validate_destination {
        tracing::warn!("Destination validation disabled; any string will be accepted");
    }

    let drain_timeout = Duration::from_secs(config.shutdown_timeout_secs);
    let bind_addr = config.bind_addr();
    let state = Arc::new(AppState::new(config));

    // ── Serve ──────────────────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    server::serve(
        listener,
        build_router(state),
        drain_timeout,
        server::shutdown_signal(),
    )
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
