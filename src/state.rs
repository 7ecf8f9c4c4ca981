use std::sync::Arc;

use crate::application::services::{
    AuthService, CoinRatesService, FooterService, HowToEarnService, IntroService,
    InvestmentService, ReviewService, StatsService,
};
use crate::infrastructure::auth::{ConfiguredAdmins, JwtVerifier};
use crate::infrastructure::market::StaticMarketData;
use crate::infrastructure::memory::MemoryContentStore;
use crate::infrastructure::storage::LocalImageStore;

/// Shared state injected into every handler.
///
/// Collaborators are trait objects so that the binary, the integration tests
/// and the unit tests can each plug in their own implementations.
#[derive(Clone)]
pub struct AppState {
    pub jwt: Arc<JwtVerifier>,
    pub auth_service: Arc<dyn AuthService>,
    pub intro_service: Arc<dyn IntroService>,
    pub stats_service: Arc<dyn StatsService>,
    pub coin_rates_service: Arc<dyn CoinRatesService>,
    pub investment_service: Arc<dyn InvestmentService>,
    pub how_to_earn_service: Arc<dyn HowToEarnService>,
    pub review_service: Arc<dyn ReviewService>,
    pub footer_service: Arc<dyn FooterService>,
}

impl AppState {
    /// Wires every collaborator to the in-process adapters.
    ///
    /// All content services share one [`MemoryContentStore`], which writes
    /// images through `images`.
    pub fn in_process(
        jwt: JwtVerifier,
        admins: ConfiguredAdmins,
        images: Arc<LocalImageStore>,
        market: StaticMarketData,
    ) -> Self {
        let content = Arc::new(MemoryContentStore::new(images));
        let market = Arc::new(market);

        Self {
            jwt: Arc::new(jwt),
            auth_service: Arc::new(admins),
            intro_service: content.clone(),
            stats_service: content.clone(),
            coin_rates_service: market.clone(),
            investment_service: market,
            how_to_earn_service: content.clone(),
            review_service: content.clone(),
            footer_service: content,
        }
    }
}
