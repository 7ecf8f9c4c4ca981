//! DTOs for the footer.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Footer, NewFooter, SocialLink};

/// Body of `POST /footer`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFooterRequest {
    #[validate(nested)]
    pub footer: FooterItem,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FooterItem {
    #[validate(required, length(min = 1))]
    pub company_name: Option<String>,

    pub about: Option<String>,

    pub email: Option<String>,

    pub phone: Option<String>,

    pub address: Option<String>,

    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl FooterItem {
    /// Converts a validated footer into the service input.
    pub fn into_new_footer(self) -> Option<NewFooter> {
        Some(NewFooter {
            company_name: self.company_name?,
            about: self.about,
            email: self.email,
            phone: self.phone,
            address: self.address,
            social_links: self.social_links,
        })
    }
}

/// Body of `POST /footer` (201) and `GET /footer` (200).
#[derive(Debug, Serialize)]
pub struct FooterResponse {
    pub footer: Option<Footer>,
}
