//! Coin rates contract.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::entities::CoinRate;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoinRatesService: Send + Sync {
    async fn retrieve_coins(&self) -> Result<Vec<CoinRate>, ServiceError>;
}
