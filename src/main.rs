//! # Todo Server
//!
//! Binary entry point. Loads `.env`, initializes the tracing subscriber, and
//! starts the HTTP server.
//!
//! ## Environment Setup
//! Copy `.env.example` to `.env` and configure:
//! ```bash
//! cp .env.example .env
//! # Edit .env with your database URL and JWT secret
//! ```
//!
//! ## Running the Server
//! ```bash
//! cargo run
//! ```
//!
//! The server will start on `http://127.0.0.1:3000` by default.
//!
//! ## Health Check
//! Once running, you can verify the server is operational:
//! ```bash
//! curl http://localhost:3000/ping
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Application entry point.
///
/// Initializes the tracing/logging system and starts the HTTP server. Runs
/// until the process is terminated; a startup failure logs the full error
/// chain and exits non-zero.
#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Console output with compact formatting; RUST_LOG overrides the default
    // info level
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false) // Don't show module targets for cleaner output
                .compact(),
        )
        .init();

    tracing::info!("🏁 Starting todo server...");
    tracing::info!(
        "📦 Package: {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!(
        "🏗️  Build profile: {}",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );

    if let Err(err) = todo_server::server::start().await {
        tracing::error!("server exited with error: {err:#}");
        std::process::exit(1);
    }
}
