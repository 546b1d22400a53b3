//! Handlers for the `/media` resource (CDN upload and delete).

use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use folio_media::{upload_batch, MediaError, MediaStore, UploadFile, UploadOutcomeView};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::ApiQuery;
use crate::middleware::admin::RequireAdmin;
use crate::query::MediaDeleteQuery;
use crate::response::DataResponse;
use crate::state::AppState;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Response for `DELETE /media`.
#[derive(Debug, Serialize)]
pub struct MediaDeleteResponse {
    pub success: bool,
    pub public_id: String,
    pub error: Option<String>,
}

fn media_store(state: &AppState) -> Result<Arc<dyn MediaStore>, AppError> {
    state.media.clone().ok_or_else(|| {
        AppError::Media(MediaError::NotConfigured(
            "CLOUDINARY_CLOUD_NAME is not set".into(),
        ))
    })
}

/// POST /api/v1/media/upload
///
/// Accepts one or more file parts. All files upload concurrently; the
/// response lists one outcome per file in the order they were sent.
pub async fn upload(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<DataResponse<Vec<UploadOutcomeView>>>> {
    let store = media_store(&state)?;
    let mut multipart = multipart?;

    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        // Only file parts; plain form fields are ignored.
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        files.push(UploadFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    if files.is_empty() {
        return Err(AppError::BadRequest("No files provided".into()));
    }

    let file_count = files.len();
    let outcomes = upload_batch(store.as_ref(), files).await;
    let uploaded = outcomes.iter().filter(|o| o.result.is_ok()).count();

    tracing::info!(file_count, uploaded, "Media batch uploaded");
    Ok(Json(DataResponse::new(
        outcomes.into_iter().map(UploadOutcomeView::from).collect(),
    )))
}

/// DELETE /api/v1/media?public_id=&resource_type=
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiQuery(query): ApiQuery<MediaDeleteQuery>,
) -> AppResult<Json<MediaDeleteResponse>> {
    let public_id = query
        .public_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing required query parameter: public_id".into()))?;
    let store = media_store(&state)?;

    store.destroy(&public_id, query.resource_type).await?;

    tracing::info!(public_id = %public_id, resource_type = %query.resource_type, "Media deleted");
    Ok(Json(MediaDeleteResponse {
        success: true,
        public_id,
        error: None,
    }))
}
