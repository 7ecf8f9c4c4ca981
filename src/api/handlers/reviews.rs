//! Handlers for customer reviews.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::review::{AddReviewsRequest, ReviewsCreatedResponse};
use crate::api::middleware::auth::{AuthUser, require_admin};
use crate::domain::entities::Review;
use crate::error::AppError;
use crate::state::AppState;

const DENIED: &str = "You are not permitted to do this";
const INVALID: &str = "Please, input valid reviews";

/// Replaces the review set with the submitted list.
///
/// # Endpoint
///
/// `POST /home/addreviews` (admin)
///
/// # Request Body
///
/// ```json
/// {
///   "reviews": [
///     {"imageUrl": null, "name": "Ada", "gender": "female", "review": "Paid on time."}
///   ]
/// }
/// ```
///
/// Every review needs a non-empty `name` and `review` and a `gender` of
/// `male` or `female`; otherwise nothing is stored.
pub async fn add_reviews_handler(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<AddReviewsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReviewsCreatedResponse>), AppError> {
    require_admin(&state, &user, DENIED).await?;

    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable reviews body");
        AppError::validation(INVALID, json!({}))
    })?;
    request
        .validate()
        .map_err(|_| AppError::validation(INVALID, json!({})))?;

    let reviews = request.reviews.into_iter().map(Review::from).collect();
    let review = state.review_service.add_reviews(reviews).await?;

    tracing::info!(user_id = %user.id, count = review.len(), "Reviews replaced");

    Ok((StatusCode::CREATED, Json(ReviewsCreatedResponse { review })))
}

/// `GET /home/getreviews` - all reviews as a bare JSON array.
pub async fn get_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = state.review_service.get_reviews().await?;
    Ok(Json(reviews))
}
