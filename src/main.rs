use std::sync::Arc;

use dotenvy::dotenv;
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use activities::config::Config;
use activities::database::ActivityStore;
use activities::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::load();

    let store = Arc::new(ActivityStore::seeded()?);
    info!(activities = store.len(), "Activity roster seeded");

    let app = web::app(store, &config.static_dir);

    let listener = bind(&config).await?;
    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{bound_addr}");
    info!("Open http://{bound_addr}/ to manage signups");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn bind(config: &Config) -> std::io::Result<TcpListener> {
    let address = config.address();
    match TcpListener::bind(&address).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let Some(fallback) = config.fallback_address() else {
                return Err(e);
            };
            warn!("Could not bind {address}: {e}. Trying fallback {fallback}");
            TcpListener::bind(&fallback).await
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
