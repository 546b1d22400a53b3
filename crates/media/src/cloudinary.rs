//! Cloudinary-compatible CDN client.
//!
//! Uploads are unsigned (they rely on an upload preset); destroy calls are
//! signed with the account secret.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use folio_core::hashing::{sha1_hex, sha256_hex};
use folio_core::media::{ResourceType, DEFAULT_UPLOAD_FOLDER, DEFAULT_UPLOAD_PRESET};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::error::MediaError;
use crate::store::{MediaStore, UploadFile, UploadedMedia};

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";

/// Timeout applied to every outbound CDN request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Signing
// ---------------------------------------------------------------------------

/// Digest used to sign destroy requests. Accounts default to SHA-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    pub fn digest_hex(self, payload: &str) -> String {
        match self {
            SignatureAlgorithm::Sha1 => sha1_hex(payload.as_bytes()),
            SignatureAlgorithm::Sha256 => sha256_hex(payload.as_bytes()),
        }
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(SignatureAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(SignatureAlgorithm::Sha256),
            other => Err(MediaError::NotConfigured(format!(
                "unknown signature algorithm '{other}'"
            ))),
        }
    }
}

/// Sign a destroy request: `hex(H("public_id={id}&timestamp={ts}{secret}"))`.
pub fn sign_destroy_request(
    public_id: &str,
    timestamp: i64,
    api_secret: &str,
    algorithm: SignatureAlgorithm,
) -> String {
    algorithm.digest_hex(&format!(
        "public_id={public_id}&timestamp={timestamp}{api_secret}"
    ))
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// CDN account settings.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    /// Required for destroy; uploads only need the preset.
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub upload_preset: String,
    pub folder: String,
    pub signature_algorithm: SignatureAlgorithm,
    /// Scheme and host of the upload API, without a trailing slash.
    pub api_base: String,
}

impl CloudinaryConfig {
    /// Minimal config for a cloud with default preset, folder and host.
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: None,
            api_secret: None,
            upload_preset: DEFAULT_UPLOAD_PRESET.to_string(),
            folder: DEFAULT_UPLOAD_FOLDER.to_string(),
            signature_algorithm: SignatureAlgorithm::default(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Load from environment variables. Returns `None` when no cloud name is set.
    ///
    /// | Env Var                          | Default                       |
    /// |----------------------------------|-------------------------------|
    /// | `CLOUDINARY_CLOUD_NAME`          | (required)                    |
    /// | `CLOUDINARY_API_KEY`             | none (destroy disabled)       |
    /// | `CLOUDINARY_API_SECRET`          | none (destroy disabled)       |
    /// | `CLOUDINARY_UPLOAD_PRESET`       | `portfolio_uploads`           |
    /// | `CLOUDINARY_FOLDER`              | `portfolio_uploads`           |
    /// | `CLOUDINARY_SIGNATURE_ALGORITHM` | `sha1`                        |
    /// | `CLOUDINARY_API_BASE`            | `https://api.cloudinary.com`  |
    pub fn from_env() -> Option<Self> {
        let cloud_name = non_empty_env("CLOUDINARY_CLOUD_NAME")?;
        let mut config = Self::new(cloud_name);

        config.api_key = non_empty_env("CLOUDINARY_API_KEY");
        config.api_secret = non_empty_env("CLOUDINARY_API_SECRET");
        if let Some(preset) = non_empty_env("CLOUDINARY_UPLOAD_PRESET") {
            config.upload_preset = preset;
        }
        if let Some(folder) = non_empty_env("CLOUDINARY_FOLDER") {
            config.folder = folder;
        }
        if let Some(algorithm) = non_empty_env("CLOUDINARY_SIGNATURE_ALGORITHM") {
            config.signature_algorithm = algorithm
                .parse()
                .expect("CLOUDINARY_SIGNATURE_ALGORITHM must be sha1 or sha256");
        }
        if let Some(base) = non_empty_env("CLOUDINARY_API_BASE") {
            config.api_base = base.trim_end_matches('/').to_string();
        }

        Some(config)
    }

    fn endpoint(&self, resource_type: ResourceType, action: &str) -> String {
        format!(
            "{}/v1_1/{}/{}/{}",
            self.api_base, self.cloud_name, resource_type, action
        )
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

/// HTTP client for one CDN account.
pub struct CloudinaryStore {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryStore {
    pub fn new(config: CloudinaryConfig) -> Result<Self, MediaError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a store reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: CloudinaryConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &CloudinaryConfig {
        &self.config
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, otherwise return
    /// [`MediaError::Api`] with the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, MediaError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MediaError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, MediaError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MediaStore for CloudinaryStore {
    async fn upload(&self, file: UploadFile) -> Result<UploadedMedia, MediaError> {
        let resource_type = file.resource_type();
        let size = file.bytes.len();
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset.clone())
            .text("folder", self.config.folder.clone());

        let response = self
            .client
            .post(self.config.endpoint(resource_type, "upload"))
            .multipart(form)
            .send()
            .await?;
        let body: UploadResponse = Self::parse_response(response).await?;

        tracing::debug!(
            file_name = %file.file_name,
            size,
            resource_type = %resource_type,
            public_id = %body.public_id,
            "Media uploaded",
        );

        Ok(UploadedMedia {
            secure_url: body.secure_url,
            public_id: body.public_id,
            resource_type,
        })
    }

    async fn destroy(
        &self,
        public_id: &str,
        resource_type: ResourceType,
    ) -> Result<(), MediaError> {
        let (Some(api_key), Some(api_secret)) = (&self.config.api_key, &self.config.api_secret)
        else {
            return Err(MediaError::NotConfigured(
                "API key and secret are required to delete media".to_string(),
            ));
        };

        let timestamp = chrono::Utc::now().timestamp();
        let signature = sign_destroy_request(
            public_id,
            timestamp,
            api_secret,
            self.config.signature_algorithm,
        );
        let params = [
            ("public_id", public_id.to_string()),
            ("timestamp", timestamp.to_string()),
            ("api_key", api_key.clone()),
            ("signature", signature),
        ];

        let response = self
            .client
            .post(self.config.endpoint(resource_type, "destroy"))
            .form(&params)
            .send()
            .await?;
        let body: DestroyResponse = Self::parse_response(response).await?;

        if body.result != "ok" {
            return Err(MediaError::Rejected(format!(
                "destroy of '{public_id}' returned '{}'",
                body.result
            )));
        }

        tracing::debug!(public_id, resource_type = %resource_type, "Media destroyed");
        Ok(())
    }
}
