//! HTTP server initialization and runtime setup.
//!
//! Wires the in-process adapters into [`AppState`] and runs the Axum server
//! until `Ctrl+C`.

use crate::config::Config;
use crate::infrastructure::auth::{ConfiguredAdmins, JwtVerifier};
use crate::infrastructure::market::StaticMarketData;
use crate::infrastructure::storage::LocalImageStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Upload directory
/// - Market data snapshot (or empty lists)
/// - Admin list and JWT verifier
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The upload directory cannot be created
/// - The market data snapshot cannot be read or parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create upload directory {}",
                config.upload_dir.display()
            )
        })?;

    let market = match &config.market_data_path {
        Some(path) => {
            let market = StaticMarketData::from_file(path)?;
            tracing::info!(
                coins = market.coins().len(),
                investments = market.investments().len(),
                "Market data loaded"
            );
            market
        }
        None => {
            tracing::info!("No market data configured, serving empty lists");
            StaticMarketData::default()
        }
    };

    let admins = ConfiguredAdmins::new(config.admin_user_ids.iter().cloned());
    let images = Arc::new(LocalImageStore::new(config.upload_dir.clone()));

    let state = AppState::in_process(
        JwtVerifier::new(&config.jwt_secret),
        admins,
        images,
        market,
    );

    let app = app_router(state, &config.upload_dir, config.max_upload_bytes);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
