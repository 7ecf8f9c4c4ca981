//! HTTP-facing error type.
//!
//! Every handler returns `Result<_, AppError>`. The response shapes follow the
//! site's existing client contract:
//!
//! | Variant          | Status | Body                          |
//! |------------------|--------|-------------------------------|
//! | `Unauthorized`   | 401    | `{"error": message}`          |
//! | `Forbidden`      | 403    | `{"message": message}`        |
//! | `Validation`     | 403    | `{"error": message, ...}`     |
//! | `BadRequest`     | 400    | `{"error": message, ...}`     |
//!
//! `details` is merged into the body when it is a JSON object, which lets a
//! handler echo the offending input next to the message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};

use crate::application::services::ServiceError;

#[derive(Debug)]
pub enum AppError {
    Unauthorized { message: String, details: Value },
    Forbidden { message: String, details: Value },
    Validation { message: String, details: Value },
    BadRequest { message: String, details: Value },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            details: json!({}),
        }
    }
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } | AppError::Validation { .. } => StatusCode::FORBIDDEN,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Unauthorized { message, .. }
            | AppError::Forbidden { message, .. }
            | AppError::Validation { message, .. }
            | AppError::BadRequest { message, .. } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.status())
    }
}

fn body(key: &str, message: String, details: Value) -> Value {
    let mut map = match details {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    map.insert(key.to_string(), Value::String(message));
    Value::Object(map)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Forbidden { message, details } => body("message", message, details),
            AppError::Unauthorized { message, details }
            | AppError::Validation { message, details }
            | AppError::BadRequest { message, details } => body("error", message, details),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        tracing::warn!(error = %e, "Service call failed");
        AppError::bad_request(e.to_string(), json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn into_parts(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_forbidden_uses_message_key() {
        let (status, body) =
            into_parts(AppError::forbidden("You are not permitted to do this")).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({"message": "You are not permitted to do this"}));
    }

    #[tokio::test]
    async fn test_validation_merges_details() {
        let (status, body) = into_parts(AppError::validation(
            "Some data missing",
            json!({"stats": {"stats1": null}}),
        ))
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Some data missing");
        assert_eq!(body["stats"], json!({"stats1": null}));
    }

    #[tokio::test]
    async fn test_non_object_details_are_dropped() {
        let (status, body) = into_parts(AppError::bad_request("boom", json!([1, 2]))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "boom"}));
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let (status, body) = into_parts(AppError::unauthorized("Unauthorized", json!({}))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_service_error_maps_to_400_with_message() {
        let err: AppError = ServiceError::rejected("Footer already locked").into();
        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Footer already locked"}));
    }
}
