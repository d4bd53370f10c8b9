//! Serve command - runs the HTTP server

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use crate::api::create_router_with_state;
use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::observability::{create_metrics_router, init_metrics};

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_logging(&config.logging);

    if let Some(e) = load_error {
        warn!(error = %e, "Could not load configuration, using defaults");
    }

    let app = create_app(&config);

    let addr = build_socket_addr(&config)?;
    info!(%addr, "Starting server");

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

fn create_app(config: &AppConfig) -> Router {
    let state = crate::create_app_state(config);
    let router = create_router_with_state(state);

    match init_metrics(&config.metrics) {
        Some(metrics) => router.merge(create_metrics_router(metrics, &config.metrics.path)),
        None => router,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
