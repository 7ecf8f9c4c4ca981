//! Reviews contract.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::entities::Review;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Saves the submitted reviews and returns the stored review set.
    async fn add_reviews(&self, reviews: Vec<Review>) -> Result<Vec<Review>, ServiceError>;

    async fn get_reviews(&self) -> Result<Vec<Review>, ServiceError>;
}
