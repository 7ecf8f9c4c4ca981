//! Headline statistics contract.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::entities::Stats;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsService: Send + Sync {
    /// Replaces the statistics document and returns what was stored.
    async fn save_one(&self, stats: Stats) -> Result<Stats, ServiceError>;

    /// Returns the current statistics, or `None` if none were saved yet.
    async fn get(&self) -> Result<Option<Stats>, ServiceError>;
}
