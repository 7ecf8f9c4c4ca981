//! Domain layer containing the homepage content records.
//!
//! Entities are plain data; how they are stored, and who may change them, is
//! decided by the collaborators in [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Content blocks, upload descriptors and request identity types

pub mod entities;
