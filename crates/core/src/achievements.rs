//! About-page achievements and the legacy-format migration.
//!
//! Achievements were once stored as a plain array of titles. Reads reshape
//! such entries into the structured `{icon, title, description}` form using
//! positional defaults; nothing is written back until the administrator
//! saves the about settings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Icon names the site knows how to render.
pub const ICON_OPTIONS: &[&str] = &[
    "Award", "Users", "Building", "Palette", "Star", "Trophy", "Target", "Zap", "Heart", "Shield",
];

/// Icons assigned by position to legacy string entries.
pub const DEFAULT_ICONS: [&str; 4] = ["Award", "Users", "Building", "Palette"];

/// Descriptions assigned by position to legacy string entries.
pub const DEFAULT_DESCRIPTIONS: [&str; 4] = [
    "Multiple awards for innovative architectural solutions",
    "Successfully completed projects for diverse clientele",
    "Specialized in large-scale commercial developments",
    "Expert in creating beautiful and functional spaces",
];

/// Icon for legacy entries past the end of [`DEFAULT_ICONS`].
pub const FALLBACK_ICON: &str = "Star";

/// Description for legacy entries past the end of [`DEFAULT_DESCRIPTIONS`].
pub const FALLBACK_DESCRIPTION: &str = "Professional achievement in architectural design";

/// Title used when an entry is neither an object nor a string.
pub const FALLBACK_TITLE: &str = "Achievement";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A single structured achievement card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Achievement {
    /// Build the structured form of a legacy title at position `index`.
    pub fn from_legacy_title(index: usize, title: &str) -> Self {
        Self {
            icon: DEFAULT_ICONS
                .get(index)
                .copied()
                .unwrap_or(FALLBACK_ICON)
                .to_string(),
            title: title.to_string(),
            description: DEFAULT_DESCRIPTIONS
                .get(index)
                .copied()
                .unwrap_or(FALLBACK_DESCRIPTION)
                .to_string(),
        }
    }

    fn placeholder() -> Self {
        Self {
            icon: FALLBACK_ICON.to_string(),
            title: FALLBACK_TITLE.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.icon.is_empty() && !self.title.is_empty() && !self.description.is_empty()
    }
}

/// Result of normalizing a stored achievements value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAchievements {
    pub items: Vec<Achievement>,
    /// `true` when at least one entry had to be reshaped.
    pub legacy: bool,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Reshape a stored achievements JSON value into structured entries.
///
/// Entry rules, by position:
/// - complete object: kept as is
/// - string holding a complete JSON object: parsed
/// - any other string: legacy title with positional defaults
/// - anything else: placeholder
///
/// A non-array value (including `null`) yields an empty list.
pub fn normalize_achievements(value: &Value) -> NormalizedAchievements {
    let Some(entries) = value.as_array() else {
        return NormalizedAchievements {
            items: Vec::new(),
            legacy: !value.is_null(),
        };
    };

    let mut legacy = false;
    let items = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if let Some(a) = complete_object(entry) {
                return a;
            }
            legacy = true;
            match entry {
                Value::String(s) => serde_json::from_str::<Value>(s)
                    .ok()
                    .and_then(|parsed| complete_object(&parsed))
                    .unwrap_or_else(|| Achievement::from_legacy_title(index, s)),
                _ => Achievement::placeholder(),
            }
        })
        .collect();

    NormalizedAchievements { items, legacy }
}

fn complete_object(value: &Value) -> Option<Achievement> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value::<Achievement>(value.clone())
        .ok()
        .filter(Achievement::is_complete)
}

/// Validate achievements before they are saved.
pub fn validate_achievements(items: &[Achievement]) -> Result<(), CoreError> {
    for (i, a) in items.iter().enumerate() {
        if !ICON_OPTIONS.contains(&a.icon.as_str()) {
            return Err(CoreError::Validation(format!(
                "Achievement {} has unknown icon '{}'. Must be one of: {}",
                i + 1,
                a.icon,
                ICON_OPTIONS.join(", ")
            )));
        }
        if a.title.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Achievement {} needs a title",
                i + 1
            )));
        }
    }
    Ok(())
}
