//! Collaborator contracts consumed by the HTTP handlers.
//!
//! Each trait is a small call/response interface over one homepage concern.
//! Implementations live in [`crate::infrastructure`]; unit tests use the
//! `mockall` mocks generated under `cfg(test)`.
//!
//! # Available Services
//!
//! - [`AuthService`] - Admin capability check
//! - [`IntroService`] - Intro banner
//! - [`StatsService`] - Headline statistics
//! - [`CoinRatesService`] - Coin rates
//! - [`InvestmentService`] - Investment plans
//! - [`HowToEarnService`] - "How to earn" steps and image
//! - [`ReviewService`] - Reviews
//! - [`FooterService`] - Footer

pub mod auth_service;
pub mod coin_rates_service;
pub mod error;
pub mod footer_service;
pub mod how_to_earn_service;
pub mod intro_service;
pub mod investment_service;
pub mod review_service;
pub mod stats_service;

pub use auth_service::AuthService;
pub use coin_rates_service::CoinRatesService;
pub use error::ServiceError;
pub use footer_service::FooterService;
pub use how_to_earn_service::HowToEarnService;
pub use intro_service::IntroService;
pub use investment_service::InvestmentService;
pub use review_service::ReviewService;
pub use stats_service::StatsService;

#[cfg(test)]
pub use auth_service::MockAuthService;
#[cfg(test)]
pub use coin_rates_service::MockCoinRatesService;
#[cfg(test)]
pub use footer_service::MockFooterService;
#[cfg(test)]
pub use how_to_earn_service::MockHowToEarnService;
#[cfg(test)]
pub use intro_service::MockIntroService;
#[cfg(test)]
pub use investment_service::MockInvestmentService;
#[cfg(test)]
pub use review_service::MockReviewService;
#[cfg(test)]
pub use stats_service::MockStatsService;
