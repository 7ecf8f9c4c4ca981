//! DTOs for the "how to earn" section.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{HowToEarn, HowToEarnImage, HowToEarnStep, NewHowToEarn};

/// Body of `POST /howtoearn`.
#[derive(Debug, Deserialize, Validate)]
pub struct HowToEarnRequest {
    #[validate(length(min = 1))]
    pub desc: String,

    pub steps: Vec<HowToEarnStep>,
}

impl From<HowToEarnRequest> for NewHowToEarn {
    fn from(request: HowToEarnRequest) -> Self {
        Self {
            desc: request.desc,
            steps: request.steps,
        }
    }
}

/// `201` body of `POST /howtoearn`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HowToEarnCreatedResponse {
    pub how_to_earn: HowToEarn,
}

/// `200` body of `GET /howtoearn`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HowToEarnResponse {
    pub how_to_earn: Option<HowToEarn>,
}

/// Body of both `POST /howtoearnimage` (201) and `GET /howtoearnimage` (200).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HowToEarnImageResponse {
    pub how_to_earn_image: Option<HowToEarnImage>,
}

/// `200` body of `GET /getfullhowtoearn`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullHowToEarnResponse {
    pub how_to_earn: Option<HowToEarn>,
    pub how_to_earn_image: Option<HowToEarnImage>,
}
