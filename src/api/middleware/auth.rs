//! Bearer token identification and the admin guard.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::domain::entities::UserId;
use crate::{error::AppError, state::AppState};

/// Caller identified by a JWT bearer token.
///
/// Use as a handler argument on every mutating endpoint. Place it before any
/// body extractor so that identification runs first.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <jwt>
/// ```
///
/// # Errors
///
/// Rejects with `401 Unauthorized` if:
/// - Authorization header is missing or not a Bearer token
/// - Token signature is invalid or the token has expired
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: UserId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthBearer(token) = AuthBearer::from_request_parts(parts, &())
            .await
            .map_err(|_| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Authorization header is missing or invalid"}),
                )
            })?;

        let claims = state.jwt.verify(&token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            AppError::unauthorized("Unauthorized", json!({"reason": "Invalid or expired token"}))
        })?;

        Ok(Self {
            id: claims.user_id(),
        })
    }
}

/// Fails with `403` and `denial` unless `user` is an administrator.
///
/// # Errors
///
/// Returns [`AppError::Forbidden`] for non-admins, and
/// [`AppError::BadRequest`] if the admin lookup itself fails.
pub async fn require_admin(
    state: &AppState,
    user: &AuthUser,
    denial: &'static str,
) -> Result<(), AppError> {
    if state.auth_service.verify_is_admin_from_id(&user.id).await? {
        Ok(())
    } else {
        tracing::info!(user_id = %user.id, "Non-admin attempted a content change");
        Err(AppError::forbidden(denial))
    }
}
