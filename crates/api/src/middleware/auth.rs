//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;
use folio_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Holder of a validly signed, unexpired access token.
///
/// This does not consult the session table; use
/// [`RequireAdmin`](super::admin::RequireAdmin) for protected handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The admin credentials id (from `claims.sub`).
    pub credential_id: DbId,
    /// The session the token was issued for (from `claims.sid`).
    pub session_id: DbId,
    /// Token expiry (UTC Unix timestamp).
    pub expires_at: i64,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            credential_id: claims.sub,
            session_id: claims.sid,
            expires_at: claims.exp,
        })
    }
}
