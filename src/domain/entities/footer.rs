//! Site footer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Footer details submitted by an admin. Only the company name is required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewFooter {
    pub company_name: String,
    pub about: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub company_name: String,
    pub about: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub updated_at: DateTime<Utc>,
}

impl Footer {
    pub fn new(new: NewFooter, updated_at: DateTime<Utc>) -> Self {
        Self {
            company_name: new.company_name,
            about: new.about,
            email: new.email,
            phone: new.phone,
            address: new.address,
            social_links: new.social_links,
            updated_at,
        }
    }
}
