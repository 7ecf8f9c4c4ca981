//! Handlers for the intro banner.

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::intro::{IntroCreatedResponse, IntroForm, IntroResponse};
use crate::api::middleware::auth::{AuthUser, require_admin};
use crate::domain::entities::RequestOrigin;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::multipart::MultipartForm;

const DENIED: &str = "You are not permitted to upload Intro";
const INVALID_FIELDS: &str = "Please, include a valid heading, body and whatsapp number";
const INVALID_IMAGE: &str = "Please, include a valid image";

/// Replaces the intro banner.
///
/// # Endpoint
///
/// `POST /home/intro` (admin, `multipart/form-data`)
///
/// # Form Fields
///
/// - `heading`, `body`, `adminWhatsappNum` - non-empty text
/// - one image file part
///
/// # Response Codes
///
/// - **201 Created**: `{"intro": {...}}`
/// - **401 Unauthorized**: missing or invalid bearer token
/// - **403 Forbidden**: caller is not an admin, or a field or the image is missing
/// - **400 Bad Request**: the intro service failed
pub async fn create_intro_handler(
    State(state): State<AppState>,
    user: AuthUser,
    origin: RequestOrigin,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<IntroCreatedResponse>), AppError> {
    require_admin(&state, &user, DENIED).await?;

    let multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Intro upload is not multipart");
        AppError::validation(INVALID_FIELDS, json!({}))
    })?;
    let mut form = MultipartForm::collect(multipart).await.map_err(|e| {
        tracing::debug!(error = %e, "Failed to read intro upload");
        AppError::validation(INVALID_FIELDS, json!({}))
    })?;

    let fields = IntroForm::from_multipart(&mut form);
    if fields.validate().is_err() {
        return Err(AppError::validation(INVALID_FIELDS, json!({})));
    }
    let new_intro = fields
        .into_new_intro()
        .ok_or_else(|| AppError::validation(INVALID_FIELDS, json!({})))?;

    let image = form
        .take_file()
        .filter(|file| file.is_image())
        .ok_or_else(|| AppError::validation(INVALID_IMAGE, json!({})))?;

    let intro = state
        .intro_service
        .create_intro(new_intro, image, &origin)
        .await?;

    tracing::info!(user_id = %user.id, "Intro updated");

    Ok((StatusCode::CREATED, Json(IntroCreatedResponse { intro })))
}

/// Returns the intro banner together with the statistics block.
///
/// # Endpoint
///
/// `GET /home/intro`
///
/// Both members are `null` until an admin has created them.
pub async fn get_intro_handler(
    State(state): State<AppState>,
    origin: RequestOrigin,
) -> Result<Json<IntroResponse>, AppError> {
    let intro = state.intro_service.get_intro(&origin).await?;
    let stats = state.stats_service.get().await?;

    Ok(Json(IntroResponse { intro, stats }))
}
