//! Weather proxy HTTP server
//!
//! Main entry point: loads configuration, wires the proxy and serves
//! `/api/weather`.

use clap::Parser;
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_core::{API_KEY_ENV, Config, WeatherProxy};
use weather_server::{AppState, create_router};

#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather proxy server")]
struct Args {
    /// Address to bind, overriding the configured host.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the configured port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_server=debug,weather_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = Config::load()
        .unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {e:#}");
            Config::default()
        })
        .apply_env();

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let proxy = WeatherProxy::from_config(&config.provider);
    if !proxy.has_api_key() {
        // Not fatal: each lookup will answer 500 until a key is configured.
        warn!("{API_KEY_ENV} is not set; weather lookups will fail");
    }
    info!(provider = %config.provider.base_url, "Configuration loaded");

    let app = create_router(AppState::new(proxy)).layer(TraceLayer::new_for_http());

    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
