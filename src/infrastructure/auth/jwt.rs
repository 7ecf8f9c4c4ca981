//! HS256 bearer tokens carrying the caller's user id.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error, ErrorKind};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::entities::UserId;

/// Claims carried by an access token.
///
/// The user id is `sub`. Tokens minted by the legacy login flow carry it as
/// `id` instead; when both are present `sub` wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    #[serde(default)]
    pub iat: i64,
}

impl Claims {
    fn subject(&self) -> Option<&str> {
        [&self.sub, &self.id]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
    }

    /// The caller's id. Empty only for claims that did not come from
    /// [`JwtVerifier::verify`].
    pub fn user_id(&self) -> UserId {
        UserId::new(self.subject().unwrap_or_default())
    }
}

/// Signs and verifies access tokens with a shared secret.
pub struct JwtVerifier {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            // HS256, `exp` required and checked
            validation: Validation::default(),
        }
    }

    /// Issues a token for `user_id` valid for `ttl`.
    ///
    /// # Errors
    ///
    /// Returns the signing error from `jsonwebtoken`.
    pub fn issue(&self, user_id: &UserId, ttl: Duration) -> Result<String, Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: Some(user_id.as_str().to_string()),
            id: None,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Validates the signature and expiry of `token` and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is malformed, signed with another
    /// secret, expired, or names no user.
    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        if data.claims.subject().is_none() {
            return Err(ErrorKind::InvalidSubject.into());
        }
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_and_verify() {
        let verifier = JwtVerifier::new("test-secret");
        let token = verifier
            .issue(&UserId::new("admin-1"), Duration::hours(1))
            .unwrap();

        let claims = verifier.verify(&token).unwrap();

        assert_eq!(claims.user_id(), UserId::new("admin-1"));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = JwtVerifier::new("secret-a")
            .issue(&UserId::new("admin-1"), Duration::hours(1))
            .unwrap();

        assert!(JwtVerifier::new("secret-b").verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let verifier = JwtVerifier::new("test-secret");
        let token = verifier
            .issue(&UserId::new("admin-1"), Duration::hours(-2))
            .unwrap();

        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_legacy_id_claim_accepted() {
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = encode(
            &Header::default(),
            &json!({"id": "64f1c2a9e4b0a1b2c3d4e5f6", "exp": exp}),
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let claims = JwtVerifier::new("test-secret").verify(&token).unwrap();

        assert_eq!(claims.user_id(), UserId::new("64f1c2a9e4b0a1b2c3d4e5f6"));
        assert_eq!(claims.iat, 0);
    }

    fn sign(claims: serde_json::Value) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_sub_preferred_over_legacy_id() {
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = sign(json!({"sub": "admin-1", "id": "legacy-7", "exp": exp}));

        let claims = JwtVerifier::new("test-secret").verify(&token).unwrap();

        assert_eq!(claims.user_id(), UserId::new("admin-1"));
    }

    #[test]
    fn test_empty_sub_falls_back_to_id() {
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = sign(json!({"sub": "", "id": "legacy-7", "exp": exp}));

        let claims = JwtVerifier::new("test-secret").verify(&token).unwrap();

        assert_eq!(claims.user_id(), UserId::new("legacy-7"));
    }

    #[test]
    fn test_token_without_subject_rejected() {
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = sign(json!({"exp": exp}));

        let err = JwtVerifier::new("test-secret").verify(&token).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::InvalidSubject));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(JwtVerifier::new("test-secret").verify("not-a-jwt").is_err());
    }
}
