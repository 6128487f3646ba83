//! JWT issuance and validation. HS256, claims `sub`/`iat`/`exp`, 7-day
//! lifetime. The secret comes from `JWT_SECRET`.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long an issued token stays valid.
const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Failed to create token: {0}")]
    Create(String),

    #[error("Token has expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: &str) -> Self {
        let now = Utc::now();
        Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        }
    }
}

/// Signs a token for the given user id.
pub fn create_token(user_id: &str, secret: &str) -> Result<String, JwtError> {
    let claims = Claims::new(user_id);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| JwtError::Create(e.to_string()))
}

/// Validates signature and expiration, returning the claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        _ => JwtError::Invalid(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-test-secret-test-secret";

    #[test]
    fn test_token_round_trip() {
        let token = create_token("user-123", SECRET).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "user-123");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token("user-123", SECRET).unwrap();
        assert!(validate_token(&token, "another-secret-entirely").is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = create_token("user-123", SECRET).unwrap();
        let tampered = format!("{}x", token);
        assert!(validate_token(&tampered, SECRET).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let claims = Claims {
            sub: "user-123".to_string(),
            iat: Utc::now().timestamp() - 3600,
            exp: Utc::now().timestamp() - 120,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        match validate_token(&token, SECRET) {
            Err(JwtError::Expired) => {}
            other => panic!("expected Expired, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(validate_token("not.a.jwt", SECRET).is_err());
    }
}
