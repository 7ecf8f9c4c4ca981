//! Intro banner shown at the top of the homepage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RequestOrigin, StoredImage};

/// Text fields submitted when an admin replaces the intro banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIntro {
    pub heading: String,
    pub body: String,
    pub admin_whatsapp_num: String,
}

/// The current intro banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intro {
    pub heading: String,
    pub body: String,
    pub admin_whatsapp_num: String,
    pub image: StoredImage,
    /// Absolute image URL; only populated on reads, since it depends on the request origin.
    pub img_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Intro {
    pub fn new(intro: NewIntro, image: StoredImage, updated_at: DateTime<Utc>) -> Self {
        Self {
            heading: intro.heading,
            body: intro.body,
            admin_whatsapp_num: intro.admin_whatsapp_num,
            image,
            img_url: None,
            updated_at,
        }
    }

    /// Fills in [`Intro::img_url`] for a request served from `origin`.
    pub fn with_origin(mut self, origin: &RequestOrigin) -> Self {
        self.img_url = Some(self.image.url(origin));
        self
    }
}
