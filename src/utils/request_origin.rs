//! Request origin extraction from HTTP request headers.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, Uri, header, request::Parts};
use serde_json::json;

use crate::AppError;
use crate::domain::entities::RequestOrigin;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the public origin of a request.
///
/// - Host: the `Host` header, falling back to the URI authority (HTTP/2)
/// - Scheme: the first `X-Forwarded-Proto` value when it is `http` or `https`,
///   otherwise `http`
///
/// The port is kept, since the origin is used to build absolute URLs.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if:
/// - Neither a `Host` header nor a URI authority is present
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "coinvest.example:8080".parse().unwrap());
///
/// let origin = extract_origin(&headers, &Uri::from_static("/home/intro")).unwrap();
/// assert_eq!(origin.to_string(), "http://coinvest.example:8080");
/// ```
pub fn extract_origin(headers: &HeaderMap, uri: &Uri) -> Result<RequestOrigin, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
            .to_string(),
        None => uri
            .authority()
            .map(|a| a.as_str().to_string())
            .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?,
    };

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    Ok(RequestOrigin::new(scheme, host))
}

impl<S> FromRequestParts<S> for RequestOrigin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_origin(&parts.headers, &parts.uri)
    }
}
