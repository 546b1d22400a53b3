//! Concurrent multi-file upload.

use futures::future::join_all;
use serde::Serialize;

use crate::error::MediaError;
use crate::store::{MediaStore, UploadFile, UploadedMedia};

/// Result of uploading one file within a batch.
#[derive(Debug)]
pub struct UploadOutcome {
    pub file_name: String,
    pub result: Result<UploadedMedia, MediaError>,
}

/// Wire form of an [`UploadOutcome`]: either the stored media or an error message.
#[derive(Debug, Serialize)]
pub struct UploadOutcomeView {
    pub file_name: String,
    #[serde(flatten)]
    pub media: Option<UploadedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<UploadOutcome> for UploadOutcomeView {
    fn from(outcome: UploadOutcome) -> Self {
        match outcome.result {
            Ok(media) => Self {
                file_name: outcome.file_name,
                media: Some(media),
                error: None,
            },
            Err(e) => Self {
                file_name: outcome.file_name,
                media: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Upload every file concurrently.
///
/// Returns one outcome per input file, in input order. A failed upload
/// never aborts the others.
pub async fn upload_batch(store: &dyn MediaStore, files: Vec<UploadFile>) -> Vec<UploadOutcome> {
    let uploads = files.into_iter().map(|file| async move {
        let file_name = file.file_name.clone();
        let result = store.upload(file).await;
        if let Err(e) = &result {
            tracing::warn!(file_name = %file_name, error = %e, "Media upload failed");
        }
        UploadOutcome { file_name, result }
    });
    join_all(uploads).await
}
