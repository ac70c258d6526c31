//! JWT Token Service
//!
//! Handles bearer token creation, validation, and claims management for user
//! authentication. Tokens are HS256-signed and expire 24 hours after issuance;
//! there is no revocation, so a token stays valid until it expires.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Issuer stamped into every token and required back on validation
pub const ISSUER: &str = "todo-server";

/// Token validity window in hours
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Opaque validation failure. Malformed tokens, bad signatures, wrong
/// issuers, and expired timestamps are indistinguishable to callers; the
/// concrete cause is only logged at debug level.
#[derive(Debug, Error)]
#[error("Invalid or expired token")]
pub struct InvalidToken;

/// JWT claims carried by every issued token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Owning user identifier
    pub sub: Uuid,
    /// Token issued at timestamp
    pub iat: i64,
    /// Token expiration timestamp
    pub exp: i64,
    /// Token issuer
    pub iss: String,
}

/// JWT Service for token operations
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with the provided secret
    pub fn new(secret: &str) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::default();
        validation.set_issuer(&[ISSUER]);

        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generate a signed token for a user
    pub fn issue_token(&self, user_id: Uuid) -> Result<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(TOKEN_TTL_HOURS);

        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            iss: ISSUER.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .context("Failed to encode JWT token")
    }

    /// Validate a token's signature, issuer, and expiry, returning its claims
    pub fn verify_token(&self, token: &str) -> Result<Claims, InvalidToken> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!("token validation failed: {err}");
                InvalidToken
            })
    }
}
