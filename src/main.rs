//! Movecar Server — blocked-car notification service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use movecar_core::config::AppConfig;
use movecar_core::error::AppError;
use movecar_core::traits::PushGateway;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("MOVECAR_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Movecar v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Initialize key-value store ───────────────────────
    tracing::info!("Initializing store (provider: {})...", config.store.provider);
    let store = Arc::new(movecar_store::StoreManager::new(&config.store).await?);
    tracing::info!("Store initialized");

    // ── Step 2: Initialize push gateway ──────────────────────────
    // A missing credential fails here, before anything is served.
    let gateway = Arc::new(movecar_push::ServerChanGateway::new(&config.push)?);
    tracing::info!("Push gateway initialized");

    // ── Step 3: Initialize services ──────────────────────────────
    let notify = Arc::new(movecar_service::NotifyService::new(
        store.backend(),
        Arc::clone(&gateway) as Arc<dyn PushGateway>,
        config.notify.clone(),
    ));
    tracing::info!("Services initialized");

    // ── Step 4: Build HTTP server ────────────────────────────────
    let app_state =
        movecar_api::AppState::new(Arc::new(config.clone()), Arc::clone(&store), notify);
    let app = movecar_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Movecar server listening on {addr}");

    // ── Step 5: Serve until shutdown ─────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Movecar server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
