//! Homepage content route table.
//!
//! Mutating handlers authenticate the caller themselves through the
//! [`AuthUser`](crate::api::middleware::auth::AuthUser) extractor, so public
//! reads and admin writes can share a path.

use crate::api::handlers::{
    add_reviews_handler, coins_handler, create_footer_handler, create_how_to_earn_handler,
    create_how_to_earn_image_handler, create_intro_handler, create_stats_handler,
    get_footer_handler, get_full_how_to_earn_handler, get_how_to_earn_handler,
    get_how_to_earn_image_handler, get_intro_handler, get_reviews_handler, get_stats_handler,
    investments_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All homepage content routes.
///
/// # Endpoints
///
/// - `GET  /intro`            - Intro banner and stats
/// - `POST /intro`            - Replace intro banner (admin, multipart)
/// - `GET  /stats`            - Headline statistics
/// - `POST /stats`            - Replace statistics (admin)
/// - `GET  /coins`            - Coin rates
/// - `GET  /investments`      - Investment plans
/// - `GET  /howtoearnimage`   - "How to earn" illustration
/// - `POST /howtoearnimage`   - Replace illustration (admin, multipart)
/// - `GET  /howtoearn`        - "How to earn" steps
/// - `POST /howtoearn`        - Replace steps (admin)
/// - `GET  /getfullhowtoearn` - Steps and illustration together
/// - `POST /addreviews`       - Replace reviews (admin)
/// - `GET  /getreviews`       - Reviews
/// - `GET  /footer`           - Footer
/// - `POST /footer`           - Replace footer (admin)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/intro", get(get_intro_handler).post(create_intro_handler))
        .route("/stats", get(get_stats_handler).post(create_stats_handler))
        .route("/coins", get(coins_handler))
        .route("/investments", get(investments_handler))
        .route(
            "/howtoearnimage",
            get(get_how_to_earn_image_handler).post(create_how_to_earn_image_handler),
        )
        .route(
            "/howtoearn",
            get(get_how_to_earn_handler).post(create_how_to_earn_handler),
        )
        .route("/getfullhowtoearn", get(get_full_how_to_earn_handler))
        .route("/addreviews", post(add_reviews_handler))
        .route("/getreviews", get(get_reviews_handler))
        .route("/footer", get(get_footer_handler).post(create_footer_handler))
}
