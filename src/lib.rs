//! # Homepage CMS
//!
//! Content API behind the homepage of a crypto-investment site, built with Axum.
//!
//! Admins replace the homepage blocks (intro banner, statistics, "how to
//! earn" section, reviews, footer); everyone else reads them along with coin
//! rates and investment plans.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Content records
//! - **Application Layer** ([`application`]) - Collaborator contracts
//! - **Infrastructure Layer** ([`infrastructure`]) - JWT identity, admin list,
//!   image storage, in-memory content store, market data snapshot
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export JWT_SECRET="change-me"
//! export ADMIN_USER_IDS="admin-1"
//!
//! # Mint a token for the admin and start the service
//! cargo run --bin admin -- token issue --user-id admin-1
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthService, CoinRatesService, FooterService, HowToEarnService, IntroService,
        InvestmentService, ReviewService, ServiceError, StatsService,
    };
    pub use crate::domain::entities::{
        Footer, HowToEarn, HowToEarnImage, Intro, RequestOrigin, Review, Stats, UserId,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
