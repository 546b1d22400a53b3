//! HTTP client for the Folio API.
//!
//! [`PublicApi`] covers what any visitor may call; [`AdminApi`] adds the
//! operations that need a bearer token. [`HttpContentClient`] implements
//! both over [`reqwest`]; view state takes the traits so it can be driven
//! by in-memory fakes.

use std::time::Duration;

use async_trait::async_trait;
use folio_core::contact::ContactForm;
use folio_core::media::ResourceType;
use folio_core::project::ProjectType;
use folio_core::types::DbId;
use folio_db::models::admin::AdminAccount;
use folio_db::models::contact::ContactSubmission;
use folio_db::models::project::{Project, UpdateProject};
use folio_db::models::settings::{
    AboutSettingsView, HeroSettings, UpsertAboutSettings, UpsertHeroSettings,
};
use folio_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Tokens returned by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub username: String,
}

/// The stored submission plus whether the owner was emailed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactReceipt {
    #[serde(flatten)]
    pub submission: ContactSubmission,
    pub email_sent: bool,
}

/// A new project as typed into the admin form. Tags are the raw
/// comma-separated text; the server splits them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tags: String,
    pub project_type: ProjectType,
    pub gallery_urls: Vec<String>,
}

/// A file picked for upload.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Outcome of uploading one file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResult {
    pub file_name: String,
    pub secure_url: Option<String>,
    pub public_id: Option<String>,
    pub resource_type: Option<ResourceType>,
    pub error: Option<String>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
    code: Option<String>,
}

#[derive(Serialize)]
struct WithId<'a, T> {
    id: DbId,
    #[serde(flatten)]
    fields: &'a T,
}

#[derive(Deserialize)]
struct LogoutData {
    revoked_sessions: u64,
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Endpoints open to every visitor.
#[async_trait]
pub trait PublicApi: Send + Sync {
    async fn get_hero(&self) -> Result<Option<HeroSettings>, ClientError>;
    async fn get_about(&self) -> Result<Option<AboutSettingsView>, ClientError>;
    async fn list_projects(&self) -> Result<Vec<Project>, ClientError>;
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ClientError>;
    async fn submit_contact(&self, form: &ContactForm) -> Result<ContactReceipt, ClientError>;
}

/// Endpoints behind the admin login.
#[async_trait]
pub trait AdminApi: PublicApi {
    async fn login(&self, username: &str, password: &str) -> Result<AuthTokens, ClientError>;
    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, ClientError>;
    /// Returns the number of sessions the server revoked.
    async fn logout(&self, token: &str) -> Result<u64, ClientError>;

    async fn create_project(&self, token: &str, draft: &ProjectDraft)
        -> Result<Project, ClientError>;
    async fn update_project(
        &self,
        token: &str,
        id: DbId,
        update: &UpdateProject,
    ) -> Result<Project, ClientError>;
    async fn delete_project(&self, token: &str, id: DbId) -> Result<(), ClientError>;

    async fn create_testimonial(
        &self,
        token: &str,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, ClientError>;
    async fn update_testimonial(
        &self,
        token: &str,
        id: DbId,
        update: &UpdateTestimonial,
    ) -> Result<Testimonial, ClientError>;
    async fn delete_testimonial(&self, token: &str, id: DbId) -> Result<(), ClientError>;

    async fn list_contacts(&self, token: &str) -> Result<Vec<ContactSubmission>, ClientError>;
    async fn mark_contact_read(&self, token: &str, id: DbId)
        -> Result<ContactSubmission, ClientError>;
    async fn delete_contact(&self, token: &str, id: DbId) -> Result<(), ClientError>;

    async fn save_hero(
        &self,
        token: &str,
        input: &UpsertHeroSettings,
    ) -> Result<HeroSettings, ClientError>;
    async fn save_about(
        &self,
        token: &str,
        input: &UpsertAboutSettings,
    ) -> Result<AboutSettingsView, ClientError>;
    async fn get_admin_account(&self, token: &str) -> Result<Option<AdminAccount>, ClientError>;
    async fn save_admin_credentials(
        &self,
        token: &str,
        username: &str,
        password: &str,
    ) -> Result<AdminAccount, ClientError>;

    async fn upload_media(&self, token: &str, file: MediaFile) -> Result<UploadResult, ClientError>;
}

// ---------------------------------------------------------------------------
// HTTP implementation
// ---------------------------------------------------------------------------

/// [`PublicApi`] and [`AdminApi`] over HTTP.
pub struct HttpContentClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentClient {
    /// Create a client for the API rooted at `base_url`, e.g.
    /// `http://localhost:3000/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // ---- private helpers ----

    /// Map a non-2xx response to [`ClientError::Api`], reading the error
    /// envelope when the body carries one.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {e}>"));
        let (code, message) = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => (envelope.code, envelope.error.unwrap_or(body)),
            Err(_) => (None, body),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }

    async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ClientError> {
        let response = Self::ensure_success(request.send().await?).await?;
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    async fn send_empty(request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        Self::ensure_success(request.send().await?).await?;
        Ok(())
    }
}

#[async_trait]
impl PublicApi for HttpContentClient {
    async fn get_hero(&self) -> Result<Option<HeroSettings>, ClientError> {
        Self::send(self.client.get(self.url("/settings/hero"))).await
    }

    async fn get_about(&self) -> Result<Option<AboutSettingsView>, ClientError> {
        Self::send(self.client.get(self.url("/settings/about"))).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        Self::send(self.client.get(self.url("/projects"))).await
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ClientError> {
        Self::send(self.client.get(self.url("/testimonials"))).await
    }

    async fn submit_contact(&self, form: &ContactForm) -> Result<ContactReceipt, ClientError> {
        Self::send(self.client.post(self.url("/contacts")).json(form)).await
    }
}

#[async_trait]
impl AdminApi for HttpContentClient {
    async fn login(&self, username: &str, password: &str) -> Result<AuthTokens, ClientError> {
        let body = serde_json::json!({ "username": username, "password": password });
        Self::send(self.client.post(self.url("/auth/login")).json(&body)).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, ClientError> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        Self::send(self.client.post(self.url("/auth/refresh")).json(&body)).await
    }

    async fn logout(&self, token: &str) -> Result<u64, ClientError> {
        let data: LogoutData =
            Self::send(self.client.post(self.url("/auth/logout")).bearer_auth(token)).await?;
        Ok(data.revoked_sessions)
    }

    async fn create_project(
        &self,
        token: &str,
        draft: &ProjectDraft,
    ) -> Result<Project, ClientError> {
        Self::send(
            self.client
                .post(self.url("/projects"))
                .bearer_auth(token)
                .json(draft),
        )
        .await
    }

    async fn update_project(
        &self,
        token: &str,
        id: DbId,
        update: &UpdateProject,
    ) -> Result<Project, ClientError> {
        Self::send(
            self.client
                .put(self.url("/projects"))
                .bearer_auth(token)
                .json(&WithId { id, fields: update }),
        )
        .await
    }

    async fn delete_project(&self, token: &str, id: DbId) -> Result<(), ClientError> {
        Self::send_empty(
            self.client
                .delete(self.url("/projects"))
                .query(&[("id", id)])
                .bearer_auth(token),
        )
        .await
    }

    async fn create_testimonial(
        &self,
        token: &str,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, ClientError> {
        Self::send(
            self.client
                .post(self.url("/testimonials"))
                .bearer_auth(token)
                .json(input),
        )
        .await
    }

    async fn update_testimonial(
        &self,
        token: &str,
        id: DbId,
        update: &UpdateTestimonial,
    ) -> Result<Testimonial, ClientError> {
        Self::send(
            self.client
                .put(self.url("/testimonials"))
                .bearer_auth(token)
                .json(&WithId { id, fields: update }),
        )
        .await
    }

    async fn delete_testimonial(&self, token: &str, id: DbId) -> Result<(), ClientError> {
        Self::send_empty(
            self.client
                .delete(self.url("/testimonials"))
                .query(&[("id", id)])
                .bearer_auth(token),
        )
        .await
    }

    async fn list_contacts(&self, token: &str) -> Result<Vec<ContactSubmission>, ClientError> {
        Self::send(self.client.get(self.url("/contacts")).bearer_auth(token)).await
    }

    async fn mark_contact_read(
        &self,
        token: &str,
        id: DbId,
    ) -> Result<ContactSubmission, ClientError> {
        let body = serde_json::json!({ "id": id, "is_read": true });
        Self::send(
            self.client
                .put(self.url("/contacts"))
                .bearer_auth(token)
                .json(&body),
        )
        .await
    }

    async fn delete_contact(&self, token: &str, id: DbId) -> Result<(), ClientError> {
        Self::send_empty(
            self.client
                .delete(self.url("/contacts"))
                .query(&[("id", id)])
                .bearer_auth(token),
        )
        .await
    }

    async fn save_hero(
        &self,
        token: &str,
        input: &UpsertHeroSettings,
    ) -> Result<HeroSettings, ClientError> {
        Self::send(
            self.client
                .put(self.url("/settings/hero"))
                .bearer_auth(token)
                .json(input),
        )
        .await
    }

    async fn save_about(
        &self,
        token: &str,
        input: &UpsertAboutSettings,
    ) -> Result<AboutSettingsView, ClientError> {
        Self::send(
            self.client
                .put(self.url("/settings/about"))
                .bearer_auth(token)
                .json(input),
        )
        .await
    }

    async fn get_admin_account(&self, token: &str) -> Result<Option<AdminAccount>, ClientError> {
        Self::send(self.client.get(self.url("/settings/admin")).bearer_auth(token)).await
    }

    async fn save_admin_credentials(
        &self,
        token: &str,
        username: &str,
        password: &str,
    ) -> Result<AdminAccount, ClientError> {
        let body = serde_json::json!({ "username": username, "password": password });
        Self::send(
            self.client
                .put(self.url("/settings/admin"))
                .bearer_auth(token)
                .json(&body),
        )
        .await
    }

    async fn upload_media(&self, token: &str, file: MediaFile) -> Result<UploadResult, ClientError> {
        let file_name = file.file_name.clone();
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;
        let form = reqwest::multipart::Form::new().part("files", part);

        let mut outcomes: Vec<UploadResult> = Self::send(
            self.client
                .post(self.url("/media/upload"))
                .bearer_auth(token)
                .multipart(form),
        )
        .await?;

        if outcomes.is_empty() {
            return Err(ClientError::Api {
                status: 200,
                code: None,
                message: format!("No upload outcome returned for {file_name}"),
            });
        }
        Ok(outcomes.swap_remove(0))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn update_body_carries_id_next_to_fields() {
        let update = UpdateProject {
            title: Some("Loft".into()),
            ..Default::default()
        };
        let body = serde_json::to_value(WithId { id: 7, fields: &update }).unwrap();
        assert_eq!(body["id"], 7);
        assert_eq!(body["title"], "Loft");
    }

    #[test]
    fn upload_result_reads_success_and_failure() {
        let ok: UploadResult = serde_json::from_value(json!({
            "file_name": "a.jpg",
            "secure_url": "https://cdn.test/a.jpg",
            "public_id": "portfolio/a",
            "resource_type": "image"
        }))
        .unwrap();
        assert_eq!(ok.resource_type, Some(ResourceType::Image));
        assert!(ok.error.is_none());

        let failed: UploadResult =
            serde_json::from_value(json!({ "file_name": "b.jpg", "error": "too big" })).unwrap();
        assert!(failed.secure_url.is_none());
        assert_eq!(failed.error.as_deref(), Some("too big"));
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = HttpContentClient::with_client(reqwest::Client::new(), "http://x/api/v1/");
        assert_eq!(client.url("/projects"), "http://x/api/v1/projects");
    }
}
