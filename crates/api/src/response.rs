//! Shared response envelope types for API handlers.
//!
//! Reads and writes answer `{ "data": ..., "error": null }`; deletes answer
//! `{ "success": true, "id": ..., "error": null }`. Failures are rendered by
//! [`crate::error::AppError`].

use folio_core::types::DbId;
use serde::Serialize;

/// Standard `{ "data": T, "error": null }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse::new(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    pub error: Option<String>,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, error: None }
    }
}

/// `{ "success": true, "id": <id>, "error": null }` returned by deletes.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub id: DbId,
    pub error: Option<String>,
}

impl DeleteResponse {
    pub fn deleted(id: DbId) -> Self {
        Self {
            success: true,
            id,
            error: None,
        }
    }
}
