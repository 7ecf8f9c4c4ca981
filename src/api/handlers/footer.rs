//! Handlers for the site footer.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::footer::{CreateFooterRequest, FooterResponse};
use crate::api::middleware::auth::{AuthUser, require_admin};
use crate::error::AppError;
use crate::state::AppState;

const DENIED: &str = "You are not permitted to do this";
const MISSING_COMPANY: &str = "Please, include the company name.";

/// Replaces the footer.
///
/// # Endpoint
///
/// `POST /home/footer` (admin)
///
/// # Request Body
///
/// ```json
/// {
///   "footer": {
///     "companyName": "Coinvest Ltd",
///     "email": "support@coinvest.example",
///     "socialLinks": [{"platform": "telegram", "url": "https://t.me/coinvest"}]
///   }
/// }
/// ```
pub async fn create_footer_handler(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<CreateFooterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FooterResponse>), AppError> {
    require_admin(&state, &user, DENIED).await?;

    let invalid = || AppError::validation(MISSING_COMPANY, json!({}));

    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable footer body");
        invalid()
    })?;
    request.validate().map_err(|_| invalid())?;
    let new_footer = request.footer.into_new_footer().ok_or_else(invalid)?;

    let footer = state.footer_service.create_footer(new_footer).await?;

    tracing::info!(user_id = %user.id, company = %footer.company_name, "Footer updated");

    Ok((
        StatusCode::CREATED,
        Json(FooterResponse {
            footer: Some(footer),
        }),
    ))
}

/// `GET /home/footer` - the footer, `null` until created.
pub async fn get_footer_handler(
    State(state): State<AppState>,
) -> Result<Json<FooterResponse>, AppError> {
    let footer = state.footer_service.get_footer().await?;

    Ok(Json(FooterResponse { footer }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::Utc;
    use serde_json::json;

    use crate::api::handlers::test_support::{Mocks, get, json_post, send};
    use crate::domain::entities::Footer;

    #[tokio::test]
    async fn test_missing_company_name() {
        let (status, body) = send(
            Mocks::with_admin(true),
            json_post("/footer", json!({"footer": {"about": "We invest"}})),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Please, include the company name.");
    }

    #[tokio::test]
    async fn test_missing_footer_object() {
        let (status, body) =
            send(Mocks::with_admin(true), json_post("/footer", json!({}))).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Please, include the company name.");
    }

    #[tokio::test]
    async fn test_create_footer() {
        let mut mocks = Mocks::with_admin(true);
        mocks
            .footer
            .expect_create_footer()
            .withf(|new| new.company_name == "Coinvest Ltd")
            .returning(|new| Ok(Footer::new(new, Utc::now())));

        let (status, body) = send(
            mocks,
            json_post("/footer", json!({"footer": {"companyName": "Coinvest Ltd"}})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["footer"]["companyName"], "Coinvest Ltd");
        assert_eq!(body["footer"]["socialLinks"], json!([]));
    }

    #[tokio::test]
    async fn test_get_footer_null_when_absent() {
        let mut mocks = Mocks::default();
        mocks.footer.expect_get_footer().returning(|| Ok(None));

        let (status, body) = send(mocks, get("/footer")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"footer": null}));
    }
}
