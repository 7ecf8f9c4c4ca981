//! Error type shared by all collaborator contracts.

use thiserror::Error;

/// Failure reported by a collaborator.
///
/// The HTTP layer does not distinguish between variants: every one of them is
/// surfaced to the client as `400 Bad Request` with the display message.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The collaborator refused the input (e.g. a constraint it enforces).
    #[error("{0}")]
    Rejected(String),

    /// Persisting or reading content failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A remote data source (price feed, identity store) failed.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl ServiceError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self {
        Self::Storage(e.to_string())
    }
}
