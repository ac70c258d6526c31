//! Auth routes for account registration and login

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::auth::models::{LoginRequest, SignupRequest};
use crate::error::{AppError, AppResult};
use crate::server::AppState;

/// Register a new account. The email is stored exactly as supplied
/// (case-sensitive); only the password hash is persisted.
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;

    if payload.email.trim().is_empty() || payload.password.trim().is_empty() {
        return Err(AppError::Validation(
            "Email and password must not be empty".to_string(),
        ));
    }

    let password_hash = state.password_service.hash_password(&payload.password)?;

    match state.db.create_user(&payload.email, &password_hash).await? {
        Some(user) => {
            tracing::info!("new user registered: {}", user.id);
            Ok((
                StatusCode::CREATED,
                Json(json!({ "message": "User created successfully" })),
            ))
        }
        None => Err(AppError::Conflict("Email already registered".to_string())),
    }
}

/// Exchange credentials for a bearer token. Unknown email and wrong password
/// produce the identical response.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(payload) = payload?;

    let user = state
        .db
        .find_user_by_email(&payload.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !state
        .password_service
        .verify_password(&payload.password, &user.password_hash)
    {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.jwt_service.issue_token(user.id)?;
    tracing::debug!("issued token for user {}", user.id);

    Ok(Json(json!({ "message": "Login successful", "token": token })))
}

pub fn create_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}
