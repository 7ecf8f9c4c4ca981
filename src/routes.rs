//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`    - Liveness check (public)
//! - `/home/*`         - Homepage content API (reads public, writes admin-only)
//! - `/uploads/*`      - Uploaded images, sent with `X-Content-Type-Options: nosniff`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/home`
//! - **Body limit** - Caps JSON and multipart bodies
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, header};
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::{SetResponseHeader, SetResponseHeaderLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `upload_dir` - directory the image store writes to, served under `/uploads`
/// - `max_body_bytes` - request body limit, multipart uploads included
pub fn app_router(
    state: AppState,
    upload_dir: &Path,
    max_body_bytes: usize,
) -> NormalizePath<Router> {
    let home_router = api::routes::routes().layer(rate_limit::layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/home", home_router)
        .nest_service("/uploads", uploads_service(upload_dir))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Static file service for stored images. Browsers must not sniff a
/// different type than the one derived from the file extension.
pub fn uploads_service(upload_dir: &Path) -> SetResponseHeader<ServeDir, HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    )
    .layer(ServeDir::new(upload_dir))
}
