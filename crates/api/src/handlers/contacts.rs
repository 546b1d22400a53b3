//! Handlers for the `/contacts` resource.
//!
//! Submitting the form is public; reading, marking and deleting messages
//! is admin-only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::contact::ContactForm;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::contact::ContactSubmission;
use folio_db::repositories::ContactRepo;
use folio_notify::ContactEmail;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::admin::RequireAdmin;
use crate::query::IdQuery;
use crate::response::{DataResponse, DeleteResponse};
use crate::state::AppState;

/// Response for `POST /contacts`.
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    #[serde(flatten)]
    pub submission: ContactSubmission,
    /// Whether the owner notification went out. The submission is stored either way.
    pub email_sent: bool,
}

/// Request body for `PUT /contacts`.
#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    pub id: Option<DbId>,
    /// Defaults to `true`.
    pub is_read: Option<bool>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Contact submission",
        id,
    })
}

/// GET /api/v1/contacts
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<ContactSubmission>>>> {
    let submissions = ContactRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(submissions)))
}

/// POST /api/v1/contacts
///
/// Stores the message, then notifies the owner by email. A failed
/// notification is logged and reported as `email_sent: false`.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ContactForm>,
) -> AppResult<(StatusCode, Json<DataResponse<ContactReceipt>>)> {
    let form = input.into_validated()?;
    let submission = ContactRepo::create(&state.pool, &form).await?;

    let email_sent = match state.notifier.notify(&ContactEmail::from(&form)).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                contact_id = submission.id,
                notifier = state.notifier.kind(),
                error = %e,
                "Contact notification failed",
            );
            false
        }
    };

    tracing::info!(contact_id = submission.id, email_sent, "Contact submission received");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(ContactReceipt {
            submission,
            email_sent,
        })),
    ))
}

/// PUT /api/v1/contacts
///
/// Set the read flag. Marking an already-read message read again succeeds.
pub async fn mark_read(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiJson(input): ApiJson<MarkReadRequest>,
) -> AppResult<Json<DataResponse<ContactSubmission>>> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("Contact submission id is required".into()))?;
    let is_read = input.is_read.unwrap_or(true);

    let submission = ContactRepo::set_read(&state.pool, id, is_read)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::debug!(contact_id = id, is_read, "Contact read flag set");
    Ok(Json(DataResponse::new(submission)))
}

/// DELETE /api/v1/contacts?id=
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> AppResult<Json<DeleteResponse>> {
    let id = query.require()?;
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(contact_id = id, "Contact submission deleted");
    Ok(Json(DeleteResponse::deleted(id)))
}
