//! # Server Module
//!
//! HTTP server setup and route configuration for the to-do server.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::jwt::JwtService;
use crate::auth::password::PasswordService;
use crate::config::Config;
use crate::database::connection::DatabaseConnection;
use crate::routes::health::ping;

/// Application state shared across all route handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub jwt_service: Arc<JwtService>,
    pub password_service: Arc<PasswordService>,
}

/// Build the full application router over the given state.
///
/// Kept separate from [`start`] so tests can drive the router directly
/// without binding a socket.
pub fn app(state: AppState) -> Router {
    let todo_routes = crate::routes::todos::create_todo_routes(state.jwt_service.clone());

    Router::new()
        .route("/ping", get(ping)) // Health check endpoint
        .merge(crate::routes::auth::create_auth_routes())
        .merge(todo_routes)
        .layer(
            ServiceBuilder::new().layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([
                        Method::GET,
                        Method::POST,
                        Method::PUT,
                        Method::DELETE,
                        Method::OPTIONS,
                    ])
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
            ),
        )
        .with_state(state)
}

/// Starts the to-do HTTP server.
///
/// Loads configuration, connects to PostgreSQL, runs pending migrations, and
/// serves the application until the process is terminated.
pub async fn start() -> Result<()> {
    let config = Config::from_env()?;

    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret));
    let password_service = Arc::new(PasswordService::new(&config.hashing)?);

    let db = Arc::new(DatabaseConnection::from_url(&config.database_url).await?);
    db.migrate().await?;

    let state = AppState {
        db,
        jwt_service,
        password_service,
    };
    let app = app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}, port may already be in use"))?;

    tracing::info!("🚀 Todo server starting...");
    tracing::info!("📡 Listening on http://{}", addr);
    tracing::info!("🏥 Health check available at http://{}/ping", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
