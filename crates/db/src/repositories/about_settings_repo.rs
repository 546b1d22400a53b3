//! Repository for the `about_settings` singleton.

use folio_core::types::SINGLETON_ID;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::settings::{AboutSettings, UpsertAboutSettings};

const COLUMNS: &str = "id, profile_image_url, bio, achievements, created_at, updated_at";

/// Reads and writes the single about settings row.
pub struct AboutSettingsRepo;

impl AboutSettingsRepo {
    /// Fetch the about settings exactly as stored, legacy achievements included.
    pub async fn find(pool: &PgPool) -> Result<Option<AboutSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_settings WHERE id = $1");
        sqlx::query_as::<_, AboutSettings>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Create the row if missing, otherwise apply the non-`None` fields.
    ///
    /// Supplied achievements replace the stored list wholesale.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertAboutSettings,
    ) -> Result<AboutSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO about_settings (id, profile_image_url, bio, achievements)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, '[]'::jsonb))
             ON CONFLICT (id) DO UPDATE SET
                profile_image_url = COALESCE($2, about_settings.profile_image_url),
                bio = COALESCE($3, about_settings.bio),
                achievements = COALESCE($4, about_settings.achievements),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutSettings>(&query)
            .bind(SINGLETON_ID)
            .bind(&input.profile_image_url)
            .bind(&input.bio)
            .bind(input.achievements.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }

    /// Overwrite the stored achievements with a raw JSON value.
    ///
    /// Only used to seed legacy data; regular writes go through [`Self::upsert`].
    pub async fn replace_raw_achievements(
        pool: &PgPool,
        achievements: &serde_json::Value,
    ) -> Result<AboutSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO about_settings (id, achievements)
             VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET
                achievements = EXCLUDED.achievements,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutSettings>(&query)
            .bind(SINGLETON_ID)
            .bind(Json(achievements))
            .fetch_one(pool)
            .await
    }
}
