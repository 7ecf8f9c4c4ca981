//! Admin check backed by a configured list of user ids.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::application::services::{AuthService, ServiceError};
use crate::domain::entities::UserId;

/// Treats every id in the list as an administrator, and nobody else.
///
/// Loaded from `ADMIN_USER_IDS` at startup; see [`crate::config::Config`].
#[derive(Debug, Default, Clone)]
pub struct ConfiguredAdmins {
    ids: HashSet<UserId>,
}

impl ConfiguredAdmins {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(UserId::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, user_id: &UserId) -> bool {
        self.ids.contains(user_id)
    }
}

#[async_trait]
impl AuthService for ConfiguredAdmins {
    async fn verify_is_admin_from_id(&self, user_id: &UserId) -> Result<bool, ServiceError> {
        Ok(self.contains(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_listed_user_is_admin() {
        let admins = ConfiguredAdmins::new(["admin-1", "admin-2"]);

        assert!(
            admins
                .verify_is_admin_from_id(&UserId::new("admin-2"))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_unlisted_user_is_not_admin() {
        let admins = ConfiguredAdmins::new(["admin-1"]);

        assert!(
            !admins
                .verify_is_admin_from_id(&UserId::new("visitor"))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_empty_list_denies_everyone() {
        let admins = ConfiguredAdmins::default();

        assert!(admins.is_empty());
        assert!(
            !admins
                .verify_is_admin_from_id(&UserId::new("admin-1"))
                .await
                .unwrap()
        );
    }
}
