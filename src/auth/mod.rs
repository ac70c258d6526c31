//! # Authentication Module
//!
//! Handles password hashing, JWT token issuance and validation, and the
//! middleware that secures the protected API endpoints.

pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
