//! Singleton settings models: hero and about copy.
//!
//! Both tables hold a single row keyed by [`folio_core::types::SINGLETON_ID`].
//! Upsert DTOs are partial: omitted fields keep their stored value (or the
//! column default when the row does not exist yet).

use folio_core::achievements::{normalize_achievements, Achievement};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// The `hero_settings` singleton row.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct HeroSettings {
    pub id: DbId,
    pub background_image_url: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub cv_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting the hero settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertHeroSettings {
    pub background_image_url: Option<String>,
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub cv_url: Option<String>,
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

/// The `about_settings` singleton row, achievements exactly as stored.
///
/// `achievements` may still hold the legacy array-of-strings shape; use
/// [`folio_core::achievements::normalize_achievements`] before presenting it.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct AboutSettings {
    pub id: DbId,
    pub profile_image_url: String,
    pub bio: String,
    pub achievements: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting the about settings. Achievements are always written in
/// structured form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertAboutSettings {
    pub profile_image_url: Option<String>,
    pub bio: Option<String>,
    pub achievements: Option<Vec<Achievement>>,
}

/// About settings as presented to readers: achievements always structured.
///
/// `legacy_achievements` is `true` when the stored list still needs to be
/// saved in structured form. Reading never rewrites the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSettingsView {
    pub id: DbId,
    pub profile_image_url: String,
    pub bio: String,
    pub achievements: Vec<Achievement>,
    pub legacy_achievements: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AboutSettings> for AboutSettingsView {
    fn from(row: AboutSettings) -> Self {
        let normalized = normalize_achievements(&row.achievements);
        Self {
            id: row.id,
            profile_image_url: row.profile_image_url,
            bio: row.bio,
            achievements: normalized.items,
            legacy_achievements: normalized.legacy,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    fn row(achievements: serde_json::Value) -> AboutSettings {
        AboutSettings {
            id: 1,
            profile_image_url: String::new(),
            bio: "Bio".to_string(),
            achievements,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn view_flags_legacy_rows() {
        let view = AboutSettingsView::from(row(json!(["Award Title A", "Award Title B"])));
        assert!(view.legacy_achievements);
        assert_eq!(view.achievements[0].icon, "Award");
        assert_eq!(view.achievements[1].icon, "Users");
    }

    #[test]
    fn view_keeps_structured_rows() {
        let view = AboutSettingsView::from(row(json!([
            {"icon": "Star", "title": "Prize", "description": "For a house"}
        ])));
        assert!(!view.legacy_achievements);
        assert_eq!(view.achievements.len(), 1);
    }
}
