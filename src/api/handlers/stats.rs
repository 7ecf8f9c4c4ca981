//! Handlers for the headline statistics block.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::api::dto::stats::{SavedStatsResponse, StatsRequest, StatsResponse};
use crate::api::middleware::auth::{AuthUser, require_admin};
use crate::error::AppError;
use crate::state::AppState;

const DENIED: &str = "You are not permitted to create stats";
const MISSING: &str = "Some data missing";

/// Replaces the four headline statistics.
///
/// # Endpoint
///
/// `POST /home/stats` (admin)
///
/// # Request Body
///
/// ```json
/// {
///   "stats1": {"data": "10k+", "desc": "Active investors"},
///   "stats2": {"data": "$2M", "desc": "Paid out"},
///   "stats3": {"data": "24/7", "desc": "Support"},
///   "stats4": {"data": "5", "desc": "Years online"}
/// }
/// ```
///
/// # Errors
///
/// An incomplete or malformed body answers `403` with the submitted JSON
/// echoed as-is under `stats`, so the admin form can show what was received.
/// A body that is not JSON at all echoes `null`.
pub async fn create_stats_handler(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SavedStatsResponse>), AppError> {
    require_admin(&state, &user, DENIED).await?;

    let Json(body) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable stats body");
        AppError::validation(MISSING, json!({ "stats": null }))
    })?;

    let stats = serde_json::from_value::<StatsRequest>(body.clone())
        .ok()
        .and_then(|request| request.to_stats())
        .ok_or_else(|| AppError::validation(MISSING, json!({ "stats": body })))?;

    let saved_stats = state.stats_service.save_one(stats).await?;

    tracing::info!(user_id = %user.id, "Stats updated");

    Ok((StatusCode::CREATED, Json(SavedStatsResponse { saved_stats })))
}

/// Returns the statistics block, `null` until one has been saved.
///
/// # Endpoint
///
/// `GET /home/stats`
pub async fn get_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get().await?;

    Ok(Json(StatsResponse { stats }))
}
