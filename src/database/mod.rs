//! # Database Module
//!
//! PostgreSQL integration using tokio-postgres with deadpool pooling.
//! Includes connection management, models, embedded migrations, and the
//! user/to-do stores.

pub mod connection;
pub mod migrations;
pub mod models;
pub mod todos;
pub mod users;

pub use connection::{DatabaseConfig, DatabaseConnection};
pub use models::{FromRow, Todo, User};
