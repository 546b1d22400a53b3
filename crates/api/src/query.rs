//! Shared query parameter types for API handlers.

use folio_core::media::ResourceType;
use folio_core::types::DbId;
use serde::Deserialize;

use crate::error::AppError;

/// `?id=` selector used by the delete endpoints.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<DbId>,
}

impl IdQuery {
    /// The selected id, or a 400 when it is missing.
    pub fn require(&self) -> Result<DbId, AppError> {
        self.id
            .ok_or_else(|| AppError::BadRequest("Missing required query parameter: id".into()))
    }
}

/// `?public_id=&resource_type=` for `DELETE /media`.
#[derive(Debug, Deserialize)]
pub struct MediaDeleteQuery {
    pub public_id: Option<String>,
    /// Defaults to `image`.
    #[serde(default)]
    pub resource_type: ResourceType,
}
