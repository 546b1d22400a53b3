//! Session-checked admin extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;
use folio_db::repositories::AdminSessionRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a valid token whose session has not been revoked or expired.
/// Rejects with 401 otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let active = AdminSessionRepo::find_active(&state.pool, user.session_id).await?;
        if active.is_none() {
            tracing::debug!(session_id = user.session_id, "Rejected token for ended session");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Session has ended. Please log in again.".into(),
            )));
        }

        Ok(RequireAdmin(user))
    }
}
