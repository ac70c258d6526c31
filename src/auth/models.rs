//! Authentication Models
//!
//! Request payloads for the auth endpoints and the identity the gate injects
//! into protected requests. Payloads are strict: unknown fields are rejected
//! instead of silently ignored.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user information extracted from a verified token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
}

/// Signup request payload
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// Login request payload
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
