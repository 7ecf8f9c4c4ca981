//! Handlers for the "how to earn" section: the step list and its illustration.

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::how_to_earn::{
    FullHowToEarnResponse, HowToEarnCreatedResponse, HowToEarnImageResponse, HowToEarnRequest,
    HowToEarnResponse,
};
use crate::api::middleware::auth::{AuthUser, require_admin};
use crate::domain::entities::RequestOrigin;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::multipart::MultipartForm;

const IMAGE_DENIED: &str = "You are not permitted to upload image";
const DENIED: &str = "You are not permitted to do this";
const INVALID_IMAGE: &str = "Please, include a valid image";
const INVALID_DATA: &str = "Please input valid data";

/// Replaces the section illustration and returns it with its absolute URL.
///
/// # Endpoint
///
/// `POST /home/howtoearnimage` (admin, `multipart/form-data` with one image part)
pub async fn create_how_to_earn_image_handler(
    State(state): State<AppState>,
    user: AuthUser,
    origin: RequestOrigin,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<HowToEarnImageResponse>), AppError> {
    require_admin(&state, &user, IMAGE_DENIED).await?;

    let invalid = || AppError::validation(INVALID_IMAGE, json!({}));

    let multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Image upload is not multipart");
        invalid()
    })?;
    let mut form = MultipartForm::collect(multipart).await.map_err(|e| {
        tracing::debug!(error = %e, "Failed to read image upload");
        invalid()
    })?;
    let image = form
        .take_file()
        .filter(|file| file.is_image())
        .ok_or_else(invalid)?;

    state
        .how_to_earn_service
        .create_how_to_earn_image(image)
        .await?;
    let how_to_earn_image = state
        .how_to_earn_service
        .get_how_to_earn_image(&origin)
        .await?;

    tracing::info!(user_id = %user.id, "How-to-earn image updated");

    Ok((
        StatusCode::CREATED,
        Json(HowToEarnImageResponse { how_to_earn_image }),
    ))
}

/// `GET /home/howtoearnimage` - the illustration, `null` until uploaded.
pub async fn get_how_to_earn_image_handler(
    State(state): State<AppState>,
    origin: RequestOrigin,
) -> Result<Json<HowToEarnImageResponse>, AppError> {
    let how_to_earn_image = state
        .how_to_earn_service
        .get_how_to_earn_image(&origin)
        .await?;

    Ok(Json(HowToEarnImageResponse { how_to_earn_image }))
}

/// Replaces the description and step list.
///
/// # Endpoint
///
/// `POST /home/howtoearn` (admin)
///
/// # Request Body
///
/// ```json
/// {
///   "desc": "Three steps to your first payout",
///   "steps": [{"title": "Sign up", "details": "Create an account"}]
/// }
/// ```
pub async fn create_how_to_earn_handler(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<HowToEarnRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<HowToEarnCreatedResponse>), AppError> {
    require_admin(&state, &user, DENIED).await?;

    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable how-to-earn body");
        AppError::validation(INVALID_DATA, json!({}))
    })?;
    request
        .validate()
        .map_err(|_| AppError::validation(INVALID_DATA, json!({})))?;

    let how_to_earn = state
        .how_to_earn_service
        .create_how_to_earn(request.into())
        .await?;

    tracing::info!(user_id = %user.id, steps = how_to_earn.steps.len(), "How-to-earn updated");

    Ok((
        StatusCode::CREATED,
        Json(HowToEarnCreatedResponse { how_to_earn }),
    ))
}

/// `GET /home/howtoearn` - description and steps, `null` until created.
pub async fn get_how_to_earn_handler(
    State(state): State<AppState>,
) -> Result<Json<HowToEarnResponse>, AppError> {
    let how_to_earn = state.how_to_earn_service.get_how_to_earn().await?;

    Ok(Json(HowToEarnResponse { how_to_earn }))
}

/// `GET /home/getfullhowtoearn` - steps and illustration in one response.
pub async fn get_full_how_to_earn_handler(
    State(state): State<AppState>,
    origin: RequestOrigin,
) -> Result<Json<FullHowToEarnResponse>, AppError> {
    let how_to_earn = state.how_to_earn_service.get_how_to_earn().await?;
    let how_to_earn_image = state
        .how_to_earn_service
        .get_how_to_earn_image(&origin)
        .await?;

    Ok(Json(FullHowToEarnResponse {
        how_to_earn,
        how_to_earn_image,
    }))
}
