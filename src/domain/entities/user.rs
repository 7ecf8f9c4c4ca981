//! Identifier of an authenticated caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque user identifier taken from the verified bearer token.
///
/// The value is whatever the identity provider puts in the token subject
/// (a database object id in practice); it is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_serializes_as_plain_string() {
        let id = UserId::new("64f1c2a9e4b0a1b2c3d4e5f6");

        let json = serde_json::to_value(&id).unwrap();

        assert_eq!(json, serde_json::json!("64f1c2a9e4b0a1b2c3d4e5f6"));
        assert_eq!(id.to_string(), "64f1c2a9e4b0a1b2c3d4e5f6");
    }
}
