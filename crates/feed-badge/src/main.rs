//! Feed Badge Server
//!
//! Serves SVG badges showing likes, name or creator of a Bluesky feed generator.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use feed_badge::{
    badge::BadgeRenderer,
    bsky::BskyClient,
    build_router,
    config::{AppConfig, BskyConfig},
    result_ext::ResultExt,
    state::AppState,
};

/// Initialize tracing/logging.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,feed_badge=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        let layer = tracing_subscriber::fmt::layer().json();
        registry.with(layer).init();
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_file(true)
            .with_line_number(true);
        registry.with(layer).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let app_config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Failed to load app config, using defaults: {}", e);
        AppConfig::default()
    });

    init_tracing(app_config.log_json);

    let version = env!("CARGO_PKG_VERSION");
    tracing::info!(version, "Starting feed badge server");

    let bsky_config = BskyConfig::from_env()
        .log("Failed to load Bluesky configuration")?;
    if bsky_config.credentials().is_none() {
        tracing::warn!("BSKY_HANDLE or BSKY_APP_PASSWORD not set, requests will be rejected");
    }

    let client = BskyClient::new(&bsky_config)
        .log("Failed to build upstream HTTP client")?;
    tracing::info!(
        service_url = %client.base_url(),
        timeout_secs = bsky_config.timeout().as_secs(),
        "Configuration loaded"
    );

    let renderer = BadgeRenderer::new().log("Failed to compile template")?;
    let state = AppState::new(bsky_config, Arc::new(client), renderer);
    let app = build_router(state);

    let addr: SocketAddr = app_config.bind_address().parse()?;
    let listener = TcpListener::bind(addr)
        .await
        .log("Failed to bind to address")?;

    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Resolve once the process is asked to stop, by Ctrl+C or SIGTERM.
///
/// A handler that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        _ = interrupt => "SIGINT",
        _ = terminate => "SIGTERM",
    };
    tracing::info!(signal = received, "Draining in-flight badge requests");
}
