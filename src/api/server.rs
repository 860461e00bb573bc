use axum::{
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use crate::config::WalletConfig;
use crate::storage::Storage;
use crate::wallet::WalletStore;

/// One store behind one lock: the wallet has a single logical writer.
pub type SharedStore = Arc<Mutex<WalletStore>>;

pub async fn start_server(addr: &str) -> anyhow::Result<()> {
    let config = WalletConfig::from_env();
    let storage = Storage::new_with_base_dir(config.data_dir.clone());
    let store: SharedStore = Arc::new(Mutex::new(WalletStore::open(storage)?));

    // Configure CORS based on environment
    // Set ALLOWED_ORIGINS="https://your-app.example.com" for production
    // If not set, allows any origin (development mode)
    let cors = match std::env::var("ALLOWED_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            log::info!("CORS configured for origins: {}", origins);
            let origin_list: Vec<_> = origins
                .split(',')
                .map(|s| s.trim().parse().expect("Invalid CORS origin"))
                .collect();
            CorsLayer::new()
                .allow_origin(origin_list)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        _ => {
            log::warn!("CORS: Allowing all origins (development mode). Set ALLOWED_ORIGINS env var for production.");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let app = router(store).layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Build the wallet API router around a shared store.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/wallet/state", get(handlers::get_state_handler))
        .route(
            "/api/wallet/generate",
            post(handlers::generate_wallet_handler),
        )
        .route("/api/wallet/faucet", post(handlers::faucet_handler))
        .route("/api/wallet/send", post(handlers::send_handler))
        .route("/api/wallet/send/preview", post(handlers::preview_handler))
        .route("/api/wallet/balances", post(handlers::set_balances_handler))
        .route(
            "/api/wallet/theme/toggle",
            post(handlers::toggle_theme_handler),
        )
        .route("/api/wallet/reset", post(handlers::reset_handler))
        .with_state(store)
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            log::info!("Received SIGTERM signal");
        },
    }

    // State is persisted after every mutation, so there is nothing to flush
    log::info!("Shutdown signal received, exiting gracefully...");
}
