use axum::response::Json;
use serde_json::json;

/// Health check endpoint handler.
///
/// Returns a JSON response indicating the server is operational. Commonly
/// used by load balancers, uptime monitors, and container orchestrators to
/// verify service availability.
///
/// # Route
/// - **Method**: GET
/// - **Path**: `/ping`
/// - **Response**: `{"status": "pong"}` with 200 OK
///
/// # Examples
/// ```bash
/// curl http://localhost:3000/ping
/// # Response: {"status":"pong"}
/// ```
pub async fn ping() -> Json<serde_json::Value> {
    // Return a simple JSON response indicating the server is alive
    Json(json!({ "status": "pong" }))
}
