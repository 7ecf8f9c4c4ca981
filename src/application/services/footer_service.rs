//! Footer contract.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::entities::{Footer, NewFooter};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FooterService: Send + Sync {
    /// Replaces the footer and returns the stored record.
    async fn create_footer(&self, footer: NewFooter) -> Result<Footer, ServiceError>;

    async fn get_footer(&self) -> Result<Option<Footer>, ServiceError>;
}
