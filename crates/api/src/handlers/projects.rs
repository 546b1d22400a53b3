//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::project::{
    normalize_gallery, normalize_tags, parse_tags, validate_new_project, validate_project_update,
    ProjectType,
};
use folio_core::types::DbId;
use folio_db::models::project::{CreateProject, Project, UpdateProject};
use folio_db::repositories::ProjectRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::admin::RequireAdmin;
use crate::query::IdQuery;
use crate::response::{DataResponse, DeleteResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Tags arrive either as a list or as the comma-separated text the admin typed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Text(String),
}

impl TagsInput {
    fn into_tags(self) -> Vec<String> {
        match self {
            TagsInput::List(tags) => normalize_tags(tags),
            TagsInput::Text(text) => parse_tags(&text),
        }
    }
}

/// Request body for `POST /projects`.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub tags: Option<TagsInput>,
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub gallery_urls: Vec<String>,
}

/// Request body for `PUT /projects`. The target id travels in the body.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<TagsInput>,
    pub project_type: Option<ProjectType>,
    pub gallery_urls: Option<Vec<String>>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(projects)))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse::new(project)))
}

/// POST /api/v1/projects
///
/// Validation runs before any write: a project without title, description
/// or main image is rejected and nothing is stored.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(input): ApiJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    validate_new_project(&input.title, &input.description, &input.image_url)?;

    let create = CreateProject {
        title: input.title.trim().to_string(),
        description: input.description.trim().to_string(),
        image_url: input.image_url.trim().to_string(),
        tags: input.tags.map(TagsInput::into_tags).unwrap_or_default(),
        project_type: input.project_type.unwrap_or_default(),
        gallery_urls: normalize_gallery(&input.gallery_urls),
    };
    let project = ProjectRepo::create(&state.pool, &create).await?;

    tracing::info!(
        project_id = project.id,
        project_type = %project.project_type,
        gallery_count = project.gallery_urls.len(),
        "Project created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse::new(project))))
}

/// PUT /api/v1/projects
///
/// Partial merge: omitted fields keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(input): ApiJson<UpdateProjectRequest>,
) -> AppResult<Json<DataResponse<Project>>> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("Project id is required".into()))?;

    validate_project_update(
        input.title.as_deref(),
        input.description.as_deref(),
        input.image_url.as_deref(),
    )?;

    let update = UpdateProject {
        title: trimmed(input.title),
        description: trimmed(input.description),
        image_url: trimmed(input.image_url),
        tags: input.tags.map(TagsInput::into_tags),
        project_type: input.project_type,
        gallery_urls: input.gallery_urls.as_deref().map(normalize_gallery),
    };
    let project = ProjectRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(project_id = id, "Project updated");
    Ok(Json(DataResponse::new(project)))
}

/// DELETE /api/v1/projects?id=
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> AppResult<Json<DeleteResponse>> {
    let id = query.require()?;
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(DeleteResponse::deleted(id)))
}
