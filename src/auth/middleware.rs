//! Authentication Middleware
//!
//! Axum middleware that gates protected routes behind bearer token
//! validation. Rejection short-circuits before any handler logic runs.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::jwt::JwtService;
use crate::auth::models::AuthUser;
use crate::error::AppError;

/// Authentication middleware that validates bearer tokens and injects the
/// caller's identity into request extensions
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// Middleware function for validating bearer tokens.
    ///
    /// A missing header, a non-Bearer scheme, or an empty token all count as
    /// "no credential supplied" and yield 401. A credential that is present
    /// but fails validation yields 403.
    pub async fn validate_token(
        State(jwt_service): State<Arc<JwtService>>,
        mut req: Request,
        next: Next,
    ) -> Result<Response, AppError> {
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .filter(|token| !token.is_empty())
            .map(str::to_owned);

        let token = match token {
            Some(token) => token,
            None => {
                tracing::warn!("{} {} rejected: no bearer credential", req.method(), req.uri());
                return Err(AppError::Unauthorized(
                    "Authorization token missing".to_string(),
                ));
            }
        };

        let claims = jwt_service.verify_token(&token).map_err(|err| {
            tracing::warn!("{} {} rejected: token failed validation", req.method(), req.uri());
            AppError::Forbidden(err.to_string())
        })?;

        req.extensions_mut().insert(AuthUser { id: claims.sub });

        Ok(next.run(req).await)
    }
}
