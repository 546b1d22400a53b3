//! Project entity model and DTOs.

use folio_core::project::ProjectType;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
    #[sqlx(try_from = "String")]
    pub project_type: ProjectType,
    pub gallery_urls: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Defaults to `architectural` if omitted.
    #[serde(default)]
    pub project_type: ProjectType,
    #[serde(default)]
    pub gallery_urls: Vec<String>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub project_type: Option<ProjectType>,
    pub gallery_urls: Option<Vec<String>>,
}
