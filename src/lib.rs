//! # Todo Server
//!
//! A multi-user to-do list API server built with Axum and Tokio. Users
//! register and log in with email + password, then manage their own to-do
//! items through bearer-token-protected JSON endpoints.
//!
//! ## Architecture
//! The crate is organized into modules:
//! - `server`: Router assembly and server startup
//! - `config`: Environment variable configuration management
//! - `auth`: Password hashing, JWT issuance/validation, and the request gate
//! - `database`: PostgreSQL pool, models, migrations, and the stores
//! - `routes`: HTTP route handlers organized by functionality
//! - `error`: Request-level error taxonomy with HTTP status mapping

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod routes;
pub mod server;
