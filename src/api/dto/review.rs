//! DTOs for reviews.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Gender, Review};

/// Body of `POST /addreviews`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddReviewsRequest {
    #[validate(nested)]
    pub reviews: Vec<ReviewItem>,
}

/// A single submitted review.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    #[serde(default)]
    pub image_url: Option<String>,

    #[validate(length(min = 1))]
    pub name: String,

    pub gender: Gender,

    #[validate(length(min = 1))]
    pub review: String,
}

impl From<ReviewItem> for Review {
    fn from(item: ReviewItem) -> Self {
        Self {
            image_url: item.image_url,
            name: item.name,
            gender: item.gender,
            review: item.review,
        }
    }
}

/// `201` body of `POST /addreviews`.
#[derive(Debug, Serialize)]
pub struct ReviewsCreatedResponse {
    pub review: Vec<Review>,
}
