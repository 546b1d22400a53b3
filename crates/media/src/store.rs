use async_trait::async_trait;
use folio_core::media::ResourceType;
use serde::{Deserialize, Serialize};

use crate::error::MediaError;

/// A file received from the admin panel, ready to be pushed to the CDN.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Resource class derived from the declared MIME type.
    pub fn resource_type(&self) -> ResourceType {
        ResourceType::from_mime(&self.content_type)
    }
}

/// A successfully stored asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedMedia {
    pub secure_url: String,
    pub public_id: String,
    pub resource_type: ResourceType,
}

/// Storage backend for uploaded media.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Store one file and return its public URL and identifier.
    async fn upload(&self, file: UploadFile) -> Result<UploadedMedia, MediaError>;

    /// Remove a previously stored asset.
    async fn destroy(&self, public_id: &str, resource_type: ResourceType)
        -> Result<(), MediaError>;
}
