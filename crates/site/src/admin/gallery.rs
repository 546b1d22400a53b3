//! Gallery editing for a project form.

use futures::stream::{FuturesUnordered, StreamExt};

use crate::client::{AdminApi, MediaFile, UploadResult};
use crate::error::ClientError;

/// Gallery URLs being edited, grown by uploads as they complete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryDraft {
    pub urls: Vec<String>,
    /// `(file_name, error)` for every upload that failed.
    pub failures: Vec<(String, String)>,
}

impl GalleryDraft {
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            failures: Vec::new(),
        }
    }

    /// Record one upload result.
    pub fn apply(&mut self, file_name: String, result: Result<UploadResult, ClientError>) {
        match result {
            Ok(UploadResult {
                secure_url: Some(url),
                error: None,
                ..
            }) => self.urls.push(url),
            Ok(UploadResult { error, .. }) => self.failures.push((
                file_name,
                error.unwrap_or_else(|| "Upload returned no URL".to_string()),
            )),
            Err(e) => self.failures.push((file_name, e.to_string())),
        }
    }

    /// Upload every file concurrently, adding each URL as soon as its
    /// upload finishes. Returns how many uploads succeeded.
    pub async fn upload_all(
        &mut self,
        api: &dyn AdminApi,
        token: &str,
        files: Vec<MediaFile>,
    ) -> usize {
        let before = self.urls.len();
        let mut pending: FuturesUnordered<_> = files
            .into_iter()
            .map(|file| async move {
                let file_name = file.file_name.clone();
                (file_name, api.upload_media(token, file).await)
            })
            .collect();

        while let Some((file_name, result)) = pending.next().await {
            self.apply(file_name, result);
        }

        let added = self.urls.len() - before;
        tracing::debug!(added, failed = self.failures.len(), "Gallery uploads finished");
        added
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.urls.len()).then(|| self.urls.remove(index))
    }
}
