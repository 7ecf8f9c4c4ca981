//! Investment plans contract.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::entities::Investment;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvestmentService: Send + Sync {
    async fn retrieve_investments(&self) -> Result<Vec<Investment>, ServiceError>;
}
