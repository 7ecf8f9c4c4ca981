//! Intro banner contract.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::entities::{Intro, NewIntro, RequestOrigin, UploadedFile};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntroService: Send + Sync {
    /// Stores `image` and replaces the intro banner.
    ///
    /// The returned intro has its image URL resolved against `origin`.
    async fn create_intro(
        &self,
        intro: NewIntro,
        image: UploadedFile,
        origin: &RequestOrigin,
    ) -> Result<Intro, ServiceError>;

    /// Returns the current intro banner, or `None` if none was created yet.
    async fn get_intro(&self, origin: &RequestOrigin) -> Result<Option<Intro>, ServiceError>;
}
