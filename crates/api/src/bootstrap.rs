//! First-run seeding of the admin credentials.

use folio_db::models::admin::UpsertAdminCredentials;
use folio_db::repositories::AdminCredentialsRepo;
use folio_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminBootstrap;
use crate::error::AppError;

/// Seed the admin credentials from `bootstrap` when none are stored.
///
/// Stored credentials always win; the bootstrap values are only a first-run
/// default. Returns `true` when a row was inserted.
pub async fn seed_admin_credentials(
    pool: &DbPool,
    bootstrap: Option<&AdminBootstrap>,
) -> Result<bool, AppError> {
    let Some(bootstrap) = bootstrap else {
        if AdminCredentialsRepo::find(pool).await?.is_none() {
            tracing::warn!(
                "No admin credentials stored and ADMIN_USERNAME/ADMIN_PASSWORD not set; \
                 admin login is unavailable"
            );
        }
        return Ok(false);
    };

    let password_hash = hash_password(&bootstrap.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let inserted = AdminCredentialsRepo::insert_if_absent(
        pool,
        &UpsertAdminCredentials {
            username: bootstrap.username.trim().to_string(),
            password_hash,
        },
    )
    .await?;

    if inserted {
        tracing::info!(username = %bootstrap.username.trim(), "Seeded admin credentials");
    }
    Ok(inserted)
}
