//! "How to earn" section: a description, numbered steps and an illustration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RequestOrigin, StoredImage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowToEarnStep {
    pub title: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHowToEarn {
    pub desc: String,
    pub steps: Vec<HowToEarnStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HowToEarn {
    pub desc: String,
    pub steps: Vec<HowToEarnStep>,
    pub updated_at: DateTime<Utc>,
}

impl HowToEarn {
    pub fn new(new: NewHowToEarn, updated_at: DateTime<Utc>) -> Self {
        Self {
            desc: new.desc,
            steps: new.steps,
            updated_at,
        }
    }
}

/// Illustration displayed next to the "how to earn" steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HowToEarnImage {
    pub image: StoredImage,
    pub img_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl HowToEarnImage {
    pub fn new(image: StoredImage, updated_at: DateTime<Utc>) -> Self {
        Self {
            image,
            img_url: None,
            updated_at,
        }
    }

    pub fn with_origin(mut self, origin: &RequestOrigin) -> Self {
        self.img_url = Some(self.image.url(origin));
        self
    }
}
