//! Repository for the `hero_settings` singleton.

use folio_core::types::SINGLETON_ID;
use sqlx::PgPool;

use crate::models::settings::{HeroSettings, UpsertHeroSettings};

const COLUMNS: &str =
    "id, background_image_url, name, tagline, description, cv_url, created_at, updated_at";

/// Reads and writes the single hero settings row.
pub struct HeroSettingsRepo;

impl HeroSettingsRepo {
    /// Fetch the hero settings, or `None` if they have never been saved.
    pub async fn find(pool: &PgPool) -> Result<Option<HeroSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_settings WHERE id = $1");
        sqlx::query_as::<_, HeroSettings>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Create the row if missing, otherwise apply the non-`None` fields.
    ///
    /// Never produces a second row: the table is keyed on the singleton id.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertHeroSettings,
    ) -> Result<HeroSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_settings (id, background_image_url, name, tagline, description, cv_url)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''),
                     COALESCE($5, ''), COALESCE($6, ''))
             ON CONFLICT (id) DO UPDATE SET
                background_image_url = COALESCE($2, hero_settings.background_image_url),
                name = COALESCE($3, hero_settings.name),
                tagline = COALESCE($4, hero_settings.tagline),
                description = COALESCE($5, hero_settings.description),
                cv_url = COALESCE($6, hero_settings.cv_url),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSettings>(&query)
            .bind(SINGLETON_ID)
            .bind(&input.background_image_url)
            .bind(&input.name)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.cv_url)
            .fetch_one(pool)
            .await
    }
}
