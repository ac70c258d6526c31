//! Password Hashing Service
//!
//! Argon2id hashing with a fresh random salt per call, plus the matching
//! verification primitive. Cost parameters are tunable at construction so
//! deployments can balance brute-force resistance against login latency.

use anyhow::{anyhow, Result};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::config::HashingConfig;

/// Password hashing service
#[derive(Clone)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Create a service with the provided cost parameters
    pub fn new(config: &HashingConfig) -> Result<Self> {
        let params = Params::new(config.m_cost, config.t_cost, config.p_cost, None)
            .map_err(|e| anyhow!("Invalid Argon2 parameters: {e}"))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a freshly generated salt. Hashing the same
    /// password twice yields different strings, both of which verify.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow!("Failed to hash password: {e}"))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a stored PHC hash. Any parse or
    /// verification failure counts as a mismatch.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        let parsed = match PasswordHash::new(stored_hash) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!("stored password hash failed to parse: {err}");
                return false;
            }
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
