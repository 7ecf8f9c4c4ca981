//! Admin capability check.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::entities::UserId;

/// Decides whether a user may change homepage content.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::ConfiguredAdmins`] - fixed list of admin ids
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Returns `true` when `user_id` belongs to an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the lookup itself fails. An unknown user
    /// is not an error; it yields `Ok(false)`.
    async fn verify_is_admin_from_id(&self, user_id: &UserId) -> Result<bool, ServiceError>;
}
