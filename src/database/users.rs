//! User Persistence
//!
//! Queries for the users table. Duplicate-email detection happens inside the
//! insert itself, so two concurrent signups for the same address cannot both
//! succeed.

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::database::connection::DatabaseConnection;
use crate::database::models::{FromRow, User};

impl DatabaseConnection {
    /// Insert a new user. Returns `None` when the email is already taken.
    pub async fn create_user(&self, email: &str, password_hash: &str) -> Result<Option<User>> {
        let client = self
            .pool()
            .get()
            .await
            .context("Failed to get DB connection")?;

        let row = client
            .query_opt(
                "INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3)
                 ON CONFLICT (email) DO NOTHING
                 RETURNING id, email, password_hash, created_at",
                &[&Uuid::new_v4(), &email, &password_hash],
            )
            .await
            .context("Failed to insert user")?;

        row.map(|r| User::from_row(&r))
            .transpose()
            .context("Failed to read inserted user row")
    }

    /// Fetch a user by email (case-sensitive exact match)
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let client = self
            .pool()
            .get()
            .await
            .context("Failed to get DB connection")?;

        let row = client
            .query_opt(
                "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
                &[&email],
            )
            .await
            .context("Failed to query user by email")?;

        row.map(|r| User::from_row(&r))
            .transpose()
            .context("Failed to read user row")
    }
}
