//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs mirror what the admin panel posts; response DTOs are the JSON
//! envelopes the public site reads. All use camelCase on the wire.
//! Field presence is checked with `validator` where serde alone cannot
//! express it (empty strings, per-item checks).

pub mod footer;
pub mod health;
pub mod how_to_earn;
pub mod intro;
pub mod review;
pub mod stats;
