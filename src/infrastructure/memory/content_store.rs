//! Homepage content held in memory, one document per block.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::services::{
    FooterService, HowToEarnService, IntroService, ReviewService, ServiceError, StatsService,
};
use crate::domain::entities::{
    Footer, HowToEarn, HowToEarnImage, Intro, NewFooter, NewHowToEarn, NewIntro, RequestOrigin,
    Review, Stats, StoredImage, UploadedFile,
};
use crate::infrastructure::storage::LocalImageStore;

/// Keeps the latest version of every content block.
///
/// Each create call replaces the block wholesale, matching how the admin
/// panel edits the homepage one section at a time. Images are delegated to
/// a [`LocalImageStore`]; only their metadata is kept here. Replacing an
/// image deletes the file it superseded.
pub struct MemoryContentStore {
    images: Arc<LocalImageStore>,
    intro: RwLock<Option<Intro>>,
    stats: RwLock<Option<Stats>>,
    how_to_earn: RwLock<Option<HowToEarn>>,
    how_to_earn_image: RwLock<Option<HowToEarnImage>>,
    reviews: RwLock<Vec<Review>>,
    footer: RwLock<Option<Footer>>,
}

impl MemoryContentStore {
    pub fn new(images: Arc<LocalImageStore>) -> Self {
        Self {
            images,
            intro: RwLock::new(None),
            stats: RwLock::new(None),
            how_to_earn: RwLock::new(None),
            how_to_earn_image: RwLock::new(None),
            reviews: RwLock::new(Vec::new()),
            footer: RwLock::new(None),
        }
    }

    /// Deletes a superseded image. The new content is already in place, so a
    /// failure only leaves an orphaned file behind and is logged.
    async fn discard(&self, image: &StoredImage) {
        if let Err(e) = self.images.remove(image).await {
            tracing::warn!(file = %image.file_name, error = %e, "Failed to remove replaced image");
        }
    }
}

#[async_trait]
impl IntroService for MemoryContentStore {
    async fn create_intro(
        &self,
        intro: NewIntro,
        image: UploadedFile,
        origin: &RequestOrigin,
    ) -> Result<Intro, ServiceError> {
        let stored = self.images.save(&image).await?;
        let intro = Intro::new(intro, stored, Utc::now());

        let previous = self.intro.write().await.replace(intro.clone());
        if let Some(previous) = previous {
            self.discard(&previous.image).await;
        }

        Ok(intro.with_origin(origin))
    }

    async fn get_intro(&self, origin: &RequestOrigin) -> Result<Option<Intro>, ServiceError> {
        let intro = self.intro.read().await.clone();
        Ok(intro.map(|i| i.with_origin(origin)))
    }
}

#[async_trait]
impl StatsService for MemoryContentStore {
    async fn save_one(&self, stats: Stats) -> Result<Stats, ServiceError> {
        *self.stats.write().await = Some(stats.clone());
        Ok(stats)
    }

    async fn get(&self) -> Result<Option<Stats>, ServiceError> {
        Ok(self.stats.read().await.clone())
    }
}

#[async_trait]
impl HowToEarnService for MemoryContentStore {
    async fn create_how_to_earn_image(&self, image: UploadedFile) -> Result<(), ServiceError> {
        let stored = self.images.save(&image).await?;
        let previous = self
            .how_to_earn_image
            .write()
            .await
            .replace(HowToEarnImage::new(stored, Utc::now()));
        if let Some(previous) = previous {
            self.discard(&previous.image).await;
        }
        Ok(())
    }

    async fn get_how_to_earn_image(
        &self,
        origin: &RequestOrigin,
    ) -> Result<Option<HowToEarnImage>, ServiceError> {
        let image = self.how_to_earn_image.read().await.clone();
        Ok(image.map(|i| i.with_origin(origin)))
    }

    async fn create_how_to_earn(
        &self,
        how_to_earn: NewHowToEarn,
    ) -> Result<HowToEarn, ServiceError> {
        let how_to_earn = HowToEarn::new(how_to_earn, Utc::now());
        *self.how_to_earn.write().await = Some(how_to_earn.clone());
        Ok(how_to_earn)
    }

    async fn get_how_to_earn(&self) -> Result<Option<HowToEarn>, ServiceError> {
        Ok(self.how_to_earn.read().await.clone())
    }
}

#[async_trait]
impl ReviewService for MemoryContentStore {
    async fn add_reviews(&self, reviews: Vec<Review>) -> Result<Vec<Review>, ServiceError> {
        *self.reviews.write().await = reviews.clone();
        Ok(reviews)
    }

    async fn get_reviews(&self) -> Result<Vec<Review>, ServiceError> {
        Ok(self.reviews.read().await.clone())
    }
}

#[async_trait]
impl FooterService for MemoryContentStore {
    async fn create_footer(&self, footer: NewFooter) -> Result<Footer, ServiceError> {
        let footer = Footer::new(footer, Utc::now());
        *self.footer.write().await = Some(footer.clone());
        Ok(footer)
    }

    async fn get_footer(&self) -> Result<Option<Footer>, ServiceError> {
        Ok(self.footer.read().await.clone())
    }
}
