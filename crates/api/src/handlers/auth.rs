//! Handlers for the `/auth` resource (login, refresh, logout, session).

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use folio_core::error::CoreError;
use folio_core::types::{DbId, Timestamp};
use folio_db::models::admin::CreateAdminSession;
use folio_db::repositories::{AdminCredentialsRepo, AdminSessionRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum consecutive failed login attempts before login is locked.
pub const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Minutes login stays locked after too many failures.
pub const LOCK_DURATION_MINS: i64 = 15;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub username: String,
}

/// Response for `GET /auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub session_id: DbId,
    pub username: String,
    pub access_expires_at: Timestamp,
}

/// Response for `POST /auth/logout`.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub revoked_sessions: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Verify the admin credentials and open a new session. Failed attempts
/// count toward a temporary lockout; no session is written on failure.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoginRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    // 1. Load the single admin account.
    let credentials = AdminCredentialsRepo::find(&state.pool)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    // 2. Refuse while locked.
    if let Some(locked_until) = credentials.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Login is temporarily locked. Try again later.".into(),
            )));
        }
    }

    // 3. Both username and password must match.
    let password_valid = verify_password(&input.password, &credentials.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if input.username.trim() != credentials.username || !password_valid {
        let failures = AdminCredentialsRepo::increment_failed_login(&state.pool).await?;
        if failures >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            AdminCredentialsRepo::lock(&state.pool, lock_until).await?;
            tracing::warn!(failures, %lock_until, "Admin login locked after repeated failures");
        }
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    // 4. Reset counters and drop stale sessions.
    AdminCredentialsRepo::record_successful_login(&state.pool).await?;
    let cleaned = AdminSessionRepo::cleanup_expired(&state.pool).await?;

    let response = create_auth_response(&state, credentials.id, &credentials.username).await?;

    tracing::info!(username = %credentials.username, cleaned, "Admin logged in");
    Ok(Json(DataResponse::new(response)))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new tokens. The old session is revoked.
pub async fn refresh(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RefreshRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = AdminSessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // Token rotation. Only the caller whose UPDATE revoked the row may mint a
    // new session; a concurrent refresh with the same token lost the race.
    if !AdminSessionRepo::revoke(&state.pool, session.id).await? {
        tracing::warn!(session_id = session.id, "Refresh token reused during rotation");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid or expired refresh token".into(),
        )));
    }

    let credentials = AdminCredentialsRepo::find(&state.pool)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Admin account missing".into())))?;

    let response = create_auth_response(&state, credentials.id, &credentials.username).await?;

    tracing::info!(old_session_id = session.id, "Admin session refreshed");
    Ok(Json(DataResponse::new(response)))
}

/// POST /api/v1/auth/logout
///
/// Revoke every admin session. Outstanding access tokens stop working at once.
pub async fn logout(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<Json<DataResponse<LogoutResponse>>> {
    let revoked_sessions = AdminSessionRepo::revoke_all(&state.pool).await?;
    tracing::info!(session_id = admin.session_id, revoked_sessions, "Admin logged out");
    Ok(Json(DataResponse::new(LogoutResponse { revoked_sessions })))
}

/// GET /api/v1/auth/session
pub async fn session(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<Json<DataResponse<SessionInfo>>> {
    let credentials = AdminCredentialsRepo::find(&state.pool)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Admin account missing".into())))?;

    let access_expires_at = DateTime::from_timestamp(admin.expires_at, 0)
        .ok_or_else(|| AppError::InternalError("Token expiry out of range".into()))?;

    Ok(Json(DataResponse::new(SessionInfo {
        session_id: admin.session_id,
        username: credentials.username,
        access_expires_at,
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Persist a session row, then issue tokens bound to it.
async fn create_auth_response(
    state: &AppState,
    credential_id: DbId,
    username: &str,
) -> AppResult<AuthResponse> {
    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let session = AdminSessionRepo::create(
        &state.pool,
        &CreateAdminSession {
            refresh_token_hash: refresh_hash,
            expires_at,
        },
    )
    .await?;

    let access_token = generate_access_token(credential_id, session.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        username: username.to_string(),
    })
}
