//! "How to earn" section contract.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::entities::{
    HowToEarn, HowToEarnImage, NewHowToEarn, RequestOrigin, UploadedFile,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HowToEarnService: Send + Sync {
    /// Stores `image` as the section illustration, replacing any previous one.
    async fn create_how_to_earn_image(&self, image: UploadedFile) -> Result<(), ServiceError>;

    /// Returns the current illustration with its URL resolved against `origin`.
    async fn get_how_to_earn_image(
        &self,
        origin: &RequestOrigin,
    ) -> Result<Option<HowToEarnImage>, ServiceError>;

    /// Replaces the description and steps.
    async fn create_how_to_earn(&self, how_to_earn: NewHowToEarn)
    -> Result<HowToEarn, ServiceError>;

    async fn get_how_to_earn(&self) -> Result<Option<HowToEarn>, ServiceError>;
}
