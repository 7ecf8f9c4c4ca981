//! Core domain entities representing the homepage content model.
//!
//! # Entity Types
//!
//! - [`Intro`] - Intro banner with heading, body, WhatsApp contact and image
//! - [`Stats`] - Four headline statistics
//! - [`CoinRate`] / [`Investment`] - Market data shown on the homepage
//! - [`HowToEarn`] / [`HowToEarnImage`] - "How to earn" steps and illustration
//! - [`Review`] - Customer testimonial
//! - [`Footer`] - Company footer details
//!
//! Creation inputs use separate `New*` structs where the stored record carries
//! extra server-side fields (timestamps, stored image metadata).
//!
//! All records serialize as camelCase JSON, which is the wire format of the site.

pub mod footer;
pub mod how_to_earn;
pub mod intro;
pub mod market;
pub mod origin;
pub mod review;
pub mod stats;
pub mod upload;
pub mod user;

pub use footer::{Footer, NewFooter, SocialLink};
pub use how_to_earn::{HowToEarn, HowToEarnImage, HowToEarnStep, NewHowToEarn};
pub use intro::{Intro, NewIntro};
pub use market::{CoinRate, Investment};
pub use origin::RequestOrigin;
pub use review::{Gender, Review};
pub use stats::{StatEntry, Stats};
pub use upload::{StoredImage, UploadedFile};
pub use user::UserId;
