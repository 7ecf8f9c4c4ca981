//! Request helpers shared by the handlers.
//!
//! - [`request_origin`] - Public origin (`scheme://host`) of a request
//! - [`multipart`] - Multipart body collection into fields and one file

pub mod multipart;
pub mod request_origin;
