mod actor_framework;
mod api;
mod app_system;
mod clients;
mod config;
mod domain;
mod menu_actor;

#[cfg(test)]
mod mock_framework;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use crate::api::AppState;
use crate::app_system::{setup_tracing, MenuSystem};
use crate::config::Settings;

#[tokio::main]
async fn main() -> Result<(), String> {
    let settings = Settings::from_env().map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing(&settings.log_filter);

    info!(
        host = %settings.host,
        port = settings.port,
        seed_data = settings.seed_data,
        "Starting menu service"
    );

    let address = settings.socket_addr().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        e.to_string()
    })?;

    let system = MenuSystem::start(&settings).await.map_err(|e| {
        error!(error = %e, "Menu system failed to start");
        e.to_string()
    })?;

    let app = api::router(AppState::new(system.menu_client.clone()));

    let listener = TcpListener::bind(address).await.map_err(|e| {
        error!(error = %e, %address, "Failed to bind");
        e.to_string()
    })?;

    match listener.local_addr() {
        Ok(address) => info!(%address, "Listening"),
        Err(e) => warn!(error = %e, "Could not determine local address"),
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
    }

    system.shutdown().await?;

    info!("Menu service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
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
