//! To-do routes: owner-scoped CRUD behind the authentication gate
//!
//! Every handler takes the owner id from the verified token, never from the
//! request body, and every store call matches on both the to-do id and the
//! owner id. A to-do owned by someone else is indistinguishable from one
//! that does not exist.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{middleware, Extension, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::jwt::JwtService;
use crate::auth::middleware::AuthMiddleware;
use crate::auth::models::AuthUser;
use crate::error::{AppError, AppResult};
use crate::server::AppState;

/// Create request payload
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTodoRequest {
    pub content: String,
}

/// Update request payload; absent fields keep their stored value
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoRequest {
    pub content: Option<String>,
    pub completed: Option<bool>,
}

/// Trim content, rejecting it when nothing remains
fn normalize_content(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "To-do content must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

pub async fn create_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(payload) = payload?;
    let content = normalize_content(&payload.content)?;

    let todo = state.db.create_todo(user.id, &content).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "To-do added successfully", "todo": todo })),
    ))
}

pub async fn list_todos(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> AppResult<Json<Value>> {
    let todos = state.db.list_todos_by_owner(user.id).await?;

    Ok(Json(json!({ "todos": todos })))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(payload) = payload?;
    let content = payload
        .content
        .as_deref()
        .map(normalize_content)
        .transpose()?;

    let todo = state
        .db
        .update_todo(user.id, id, content.as_deref(), payload.completed)
        .await?
        .ok_or_else(|| AppError::NotFound("To-do not found".to_string()))?;

    Ok(Json(
        json!({ "message": "To-do updated successfully", "todo": todo }),
    ))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    if !state.db.delete_todo(user.id, id).await? {
        return Err(AppError::NotFound("To-do not found".to_string()));
    }

    Ok(Json(json!({ "message": "To-do deleted successfully" })))
}

/// All /todos routes sit behind the token-validation gate
pub fn create_todo_routes(jwt_service: Arc<JwtService>) -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .layer(middleware::from_fn_with_state(
            jwt_service,
            AuthMiddleware::validate_token,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_trimmed() {
        assert_eq!(normalize_content("  buy milk  ").unwrap(), "buy milk");
        assert_eq!(normalize_content("buy milk").unwrap(), "buy milk");
    }

    #[test]
    fn whitespace_only_content_is_rejected() {
        assert!(normalize_content("").is_err());
        assert!(normalize_content("   ").is_err());
        assert!(normalize_content("\t\n").is_err());
    }

    #[test]
    fn update_request_fields_are_optional() {
        let request: UpdateTodoRequest = serde_json::from_str("{}").unwrap();
        assert!(request.content.is_none());
        assert!(request.completed.is_none());

        let request: UpdateTodoRequest =
            serde_json::from_str(r#"{"completed": true}"#).unwrap();
        assert!(request.content.is_none());
        assert_eq!(request.completed, Some(true));
    }

    #[test]
    fn request_payloads_reject_unknown_fields() {
        let result: Result<CreateTodoRequest, _> =
            serde_json::from_str(r#"{"content": "x", "owner_id": "abc"}"#);
        assert!(result.is_err());

        let result: Result<UpdateTodoRequest, _> =
            serde_json::from_str(r#"{"completed": true, "owner_id": "abc"}"#);
        assert!(result.is_err());
    }
}
