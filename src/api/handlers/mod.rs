//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one homepage content block. Mutating
//! handlers take [`AuthUser`](crate::api::middleware::auth::AuthUser) before
//! their body extractor and call
//! [`require_admin`](crate::api::middleware::auth::require_admin) before
//! looking at the body.

pub mod footer;
pub mod health;
pub mod how_to_earn;
pub mod intro;
pub mod market;
pub mod reviews;
pub mod stats;

pub use footer::{create_footer_handler, get_footer_handler};
pub use health::health_handler;
pub use how_to_earn::{
    create_how_to_earn_handler, create_how_to_earn_image_handler, get_full_how_to_earn_handler,
    get_how_to_earn_handler, get_how_to_earn_image_handler,
};
pub use intro::{create_intro_handler, get_intro_handler};
pub use market::{coins_handler, investments_handler};
pub use reviews::{add_reviews_handler, get_reviews_handler};
pub use stats::{create_stats_handler, get_stats_handler};

#[cfg(test)]
pub(crate) mod test_support {
    //! Router harness backed by `mockall` collaborators.

    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::application::services::{
        MockAuthService, MockCoinRatesService, MockFooterService, MockHowToEarnService,
        MockIntroService, MockInvestmentService, MockReviewService, MockStatsService,
    };
    use crate::domain::entities::UserId;
    use crate::infrastructure::auth::JwtVerifier;
    use crate::state::AppState;

    pub const SECRET: &str = "unit-test-secret";

    #[derive(Default)]
    pub struct Mocks {
        pub auth: MockAuthService,
        pub intro: MockIntroService,
        pub stats: MockStatsService,
        pub coins: MockCoinRatesService,
        pub investments: MockInvestmentService,
        pub how_to_earn: MockHowToEarnService,
        pub reviews: MockReviewService,
        pub footer: MockFooterService,
    }

    impl Mocks {
        /// Mocks whose admin check answers `is_admin` for every caller.
        pub fn with_admin(is_admin: bool) -> Self {
            let mut mocks = Self::default();
            mocks
                .auth
                .expect_verify_is_admin_from_id()
                .returning(move |_| Ok(is_admin));
            mocks
        }

        pub fn into_state(self) -> AppState {
            AppState {
                jwt: Arc::new(JwtVerifier::new(SECRET)),
                auth_service: Arc::new(self.auth),
                intro_service: Arc::new(self.intro),
                stats_service: Arc::new(self.stats),
                coin_rates_service: Arc::new(self.coins),
                investment_service: Arc::new(self.investments),
                how_to_earn_service: Arc::new(self.how_to_earn),
                review_service: Arc::new(self.reviews),
                footer_service: Arc::new(self.footer),
            }
        }
    }

    pub fn bearer() -> String {
        let token = JwtVerifier::new(SECRET)
            .issue(&UserId::new("user-1"), chrono::Duration::hours(1))
            .unwrap();
        format!("Bearer {token}")
    }

    pub fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::AUTHORIZATION, bearer())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::get(uri)
            .header(header::HOST, "coinvest.test")
            .body(Body::empty())
            .unwrap()
    }

    pub const BOUNDARY: &str = "X-HOMEPAGE-BOUNDARY";

    pub fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    pub fn file_part(content_type: &str, data: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"banner.png\"\r\nContent-Type: {content_type}\r\n\r\n{data}\r\n"
        )
    }

    /// Authenticated `multipart/form-data` POST built from `parts`.
    pub fn multipart_post(uri: &str, parts: &[String]) -> Request<Body> {
        let mut body = parts.concat();
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::post(uri)
            .header(header::HOST, "coinvest.test")
            .header(header::AUTHORIZATION, bearer())
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    pub async fn send(mocks: Mocks, request: Request<Body>) -> (StatusCode, Value) {
        let app = crate::api::routes::routes().with_state(mocks.into_state());
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}
