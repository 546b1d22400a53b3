#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use folio_api::auth::jwt::JwtConfig;
use folio_api::auth::password::hash_password;
use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::media::ResourceType;
use folio_db::models::admin::UpsertAdminCredentials;
use folio_db::repositories::AdminCredentialsRepo;
use folio_media::{MediaError, MediaStore, UploadFile, UploadedMedia};
use folio_notify::{ContactEmail, ContactNotifier, DisabledNotifier, NotifyError};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct horse battery";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 10 * 1024 * 1024,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with no media store and a disabled
/// notifier.
pub async fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, None, Arc::new(DisabledNotifier)).await
}

/// Build the full application router with the given collaborators.
pub async fn build_test_app_with(
    pool: PgPool,
    media: Option<Arc<dyn MediaStore>>,
    notifier: Arc<dyn ContactNotifier>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media,
        notifier,
    };
    build_app_router(state, &config)
}

/// Store the admin credentials used by [`login`].
pub async fn seed_admin(pool: &PgPool) {
    let password_hash = hash_password(ADMIN_PASSWORD).expect("hashing should succeed");
    AdminCredentialsRepo::upsert(
        pool,
        &UpsertAdminCredentials {
            username: ADMIN_USERNAME.to_string(),
            password_hash,
        },
    )
    .await
    .expect("credentials upsert should succeed");
}

/// Seed the admin account, log in, and return the `data` object of the
/// login response (`access_token`, `refresh_token`, ...).
pub async fn login(app: Router, pool: &PgPool) -> serde_json::Value {
    seed_admin(pool).await;
    let body = serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

/// Convenience wrapper returning only the access token.
pub async fn admin_token(app: Router, pool: &PgPool) -> String {
    login(app, pool).await["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request("GET", uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request("GET", uri, Some(token))).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("POST", uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request("POST", uri, Some(token), body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("PUT", uri, None, body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request("PUT", uri, Some(token), body)).await
}

/// POST a raw, possibly malformed, body labelled as JSON.
pub async fn post_raw_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request("DELETE", uri, None)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request("DELETE", uri, Some(token))).await
}

/// A file part for [`post_multipart_auth`]: `(file_name, content_type, bytes)`.
pub type FilePart<'a> = (&'a str, &'a str, &'a [u8]);

pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    files: &[FilePart<'_>],
    token: &str,
) -> Response<Body> {
    let boundary = "folio-test-boundary";
    let mut body = Vec::new();
    for (file_name, content_type, bytes) in files {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"files\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// In-memory media store. Files named `fail*` are rejected; destroying
/// `missing` reports not found.
#[derive(Default)]
pub struct FakeMediaStore {
    pub destroyed: Mutex<Vec<(String, ResourceType)>>,
}

#[async_trait]
impl MediaStore for FakeMediaStore {
    async fn upload(&self, file: UploadFile) -> Result<UploadedMedia, MediaError> {
        if file.file_name.starts_with("fail") {
            return Err(MediaError::Rejected(format!("{} is not allowed", file.file_name)));
        }
        let resource_type = file.resource_type();
        Ok(UploadedMedia {
            secure_url: format!("https://cdn.test/{}", file.file_name),
            public_id: format!("portfolio/{}", file.file_name),
            resource_type,
        })
    }

    async fn destroy(
        &self,
        public_id: &str,
        resource_type: ResourceType,
    ) -> Result<(), MediaError> {
        if public_id == "missing" {
            return Err(MediaError::Rejected("not found".into()));
        }
        self.destroyed
            .lock()
            .unwrap()
            .push((public_id.to_string(), resource_type));
        Ok(())
    }
}

/// Notifier that records every email, optionally failing each send.
#[derive(Default)]
pub struct RecordingNotifier {
    pub fail: bool,
    pub sent: Mutex<Vec<ContactEmail>>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::default(),
        }
    }
}

#[async_trait]
impl ContactNotifier for RecordingNotifier {
    async fn notify(&self, email: &ContactEmail) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::Api {
                status: 503,
                body: "unavailable".into(),
            });
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "recording"
    }
}
