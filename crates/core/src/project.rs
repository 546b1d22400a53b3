//! Project type enumeration, tag parsing, and project field validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::{reject_blank_updates, require_fields};

// ---------------------------------------------------------------------------
// Project type
// ---------------------------------------------------------------------------

/// Discipline a portfolio project belongs to. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Architectural,
    Interior,
    Production,
}

impl ProjectType {
    /// Every project type, in the order the public filter bar shows them.
    pub const ALL: [ProjectType; 3] = [
        ProjectType::Architectural,
        ProjectType::Interior,
        ProjectType::Production,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Architectural => "architectural",
            ProjectType::Interior => "interior",
            ProjectType::Production => "production",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid project type '{s}'. Must be one of: architectural, interior, production"
                ))
            })
    }
}

impl TryFrom<String> for ProjectType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Split a comma-separated tag string into trimmed, non-empty tags.
///
/// Order is preserved and duplicates are kept, matching what the admin
/// typed.
pub fn parse_tags(input: &str) -> Vec<String> {
    normalize_tags(input.split(','))
}

/// Trim every tag and drop the empty ones.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Trim gallery URLs and drop blanks.
pub fn normalize_gallery(urls: &[String]) -> Vec<String> {
    normalize_tags(urls)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A new project needs a title, a description and a main image.
pub fn validate_new_project(
    title: &str,
    description: &str,
    image_url: &str,
) -> Result<(), CoreError> {
    require_fields(&[
        ("title", title),
        ("description", description),
        ("image_url", image_url),
    ])
}

/// Partial updates may omit required fields but never blank them.
pub fn validate_project_update(
    title: Option<&str>,
    description: Option<&str>,
    image_url: Option<&str>,
) -> Result<(), CoreError> {
    reject_blank_updates(&[
        ("title", title),
        ("description", description),
        ("image_url", image_url),
    ])
}
