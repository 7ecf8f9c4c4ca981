//! Identity and admin lookup.
//!
//! - [`JwtVerifier`] - HS256 bearer token issuing and verification
//! - [`ConfiguredAdmins`] - [`crate::application::services::AuthService`] over a fixed id list

mod configured_admins;
mod jwt;

pub use configured_admins::ConfiguredAdmins;
pub use jwt::{Claims, JwtVerifier};
