//! Handlers for the singleton `/settings/*` resources.
//!
//! A singleton that has never been saved reads as `data: null`.

use axum::extract::State;
use axum::Json;
use folio_core::achievements::validate_achievements;
use folio_core::error::CoreError;
use folio_core::validation::require_fields;
use folio_db::models::admin::{AdminAccount, UpsertAdminCredentials};
use folio_db::models::settings::{
    AboutSettingsView, HeroSettings, UpsertAboutSettings, UpsertHeroSettings,
};
use folio_db::repositories::{
    AboutSettingsRepo, AdminCredentialsRepo, AdminSessionRepo, HeroSettingsRepo,
};
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /settings/admin`.
#[derive(Debug, Deserialize)]
pub struct UpdateAdminRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// GET /api/v1/settings/hero
pub async fn get_hero(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<HeroSettings>>>> {
    let hero = HeroSettingsRepo::find(&state.pool).await?;
    Ok(Json(DataResponse::new(hero)))
}

/// PUT /api/v1/settings/hero
pub async fn put_hero(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(input): ApiJson<UpsertHeroSettings>,
) -> AppResult<Json<DataResponse<HeroSettings>>> {
    let hero = HeroSettingsRepo::upsert(&state.pool, &input).await?;
    tracing::info!("Hero settings saved");
    Ok(Json(DataResponse::new(hero)))
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

/// GET /api/v1/settings/about
///
/// Legacy achievement entries are reshaped in the response only.
pub async fn get_about(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<AboutSettingsView>>>> {
    let about = AboutSettingsRepo::find(&state.pool)
        .await?
        .map(AboutSettingsView::from);

    if about.as_ref().is_some_and(|a| a.legacy_achievements) {
        tracing::debug!("About settings hold legacy achievements; save to migrate");
    }
    Ok(Json(DataResponse::new(about)))
}

/// PUT /api/v1/settings/about
///
/// Achievements, when supplied, are validated and stored in structured form.
pub async fn put_about(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(input): ApiJson<UpsertAboutSettings>,
) -> AppResult<Json<DataResponse<AboutSettingsView>>> {
    if let Some(items) = &input.achievements {
        validate_achievements(items)?;
    }

    let about = AboutSettingsRepo::upsert(&state.pool, &input).await?;
    let view = AboutSettingsView::from(about);

    tracing::info!(
        achievement_count = view.achievements.len(),
        "About settings saved",
    );
    Ok(Json(DataResponse::new(view)))
}

// ---------------------------------------------------------------------------
// Admin credentials
// ---------------------------------------------------------------------------

/// GET /api/v1/settings/admin
pub async fn get_admin(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Option<AdminAccount>>>> {
    let account = AdminCredentialsRepo::find(&state.pool)
        .await?
        .as_ref()
        .map(AdminAccount::from);
    Ok(Json(DataResponse::new(account)))
}

/// PUT /api/v1/settings/admin
///
/// Replace the admin username and password. Every session is revoked, so
/// the caller must log in again with the new credentials.
pub async fn put_admin(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiJson(input): ApiJson<UpdateAdminRequest>,
) -> AppResult<Json<DataResponse<AdminAccount>>> {
    require_fields(&[
        ("username", input.username.as_str()),
        ("password", input.password.as_str()),
    ])?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let credentials = AdminCredentialsRepo::upsert(
        &state.pool,
        &UpsertAdminCredentials {
            username: input.username.trim().to_string(),
            password_hash,
        },
    )
    .await?;
    let revoked_sessions = AdminSessionRepo::revoke_all(&state.pool).await?;

    tracing::info!(
        session_id = admin.session_id,
        username = %credentials.username,
        revoked_sessions,
        "Admin credentials changed",
    );
    Ok(Json(DataResponse::new(AdminAccount::from(&credentials))))
}
