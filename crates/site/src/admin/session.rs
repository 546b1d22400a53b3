//! Admin session persistence.

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use folio_core::types::Timestamp;
use folio_core::validation::require_fields;
use serde::{Deserialize, Serialize};

use crate::client::{AdminApi, AuthTokens};
use crate::error::ClientError;

/// A logged-in admin, as remembered between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
    pub logged_in_at: Timestamp,
    /// When the access token stops being accepted.
    pub expires_at: Timestamp,
}

impl AdminSession {
    pub fn from_tokens(tokens: AuthTokens, now: Timestamp) -> Self {
        Self {
            username: tokens.username,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            logged_in_at: now,
            expires_at: now + chrono::Duration::seconds(tokens.expires_in),
        }
    }

    pub fn is_live(&self, now: Timestamp) -> bool {
        self.expires_at > now
    }
}

/// Where the current session is kept.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<AdminSession>, ClientError>;
    fn save(&self, session: &AdminSession) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

/// Session kept for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<AdminSession>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<AdminSession>, ClientError> {
        Ok(self.session.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save(&self, session: &AdminSession) -> Result<(), ClientError> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Session kept as JSON in a file, surviving restarts.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<AdminSession>, ClientError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, session: &AdminSession) -> Result<(), ClientError> {
        std::fs::write(&self.path, serde_json::to_vec_pretty(session)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Login state of the admin panel.
pub struct AdminAuth<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> AdminAuth<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Log in and remember the session. Blank fields never reach the API.
    pub async fn login(
        &self,
        api: &dyn AdminApi,
        username: &str,
        password: &str,
    ) -> Result<AdminSession, ClientError> {
        require_fields(&[("username", username), ("password", password)])?;

        let tokens = api.login(username.trim(), password).await?;
        let session = AdminSession::from_tokens(tokens, Utc::now());
        self.store.save(&session)?;

        tracing::info!(username = %session.username, "Admin logged in");
        Ok(session)
    }

    /// The current session if it is still live. An expired session is
    /// cleared.
    pub fn require_session(&self, now: Timestamp) -> Result<AdminSession, ClientError> {
        match self.store.load()? {
            Some(session) if session.is_live(now) => Ok(session),
            Some(_) => {
                tracing::info!("Admin session expired");
                self.store.clear()?;
                Err(ClientError::LoggedOut)
            }
            None => Err(ClientError::LoggedOut),
        }
    }

    /// Bearer token of the live session.
    pub fn token(&self) -> Result<String, ClientError> {
        self.require_session(Utc::now()).map(|s| s.access_token)
    }

    /// Swap the refresh token for a new session. A refused refresh logs out.
    pub async fn refresh(&self, api: &dyn AdminApi) -> Result<AdminSession, ClientError> {
        let current = self.store.load()?.ok_or(ClientError::LoggedOut)?;
        match api.refresh(&current.refresh_token).await {
            Ok(tokens) => {
                let session = AdminSession::from_tokens(tokens, Utc::now());
                self.store.save(&session)?;
                Ok(session)
            }
            Err(e) => Err(self.check(e)),
        }
    }

    /// End the session on the server (best effort) and forget it locally.
    pub async fn logout(&self, api: &dyn AdminApi) -> Result<(), ClientError> {
        if let Some(session) = self.store.load()? {
            if let Err(e) = api.logout(&session.access_token).await {
                tracing::warn!(error = %e, "Server logout failed; clearing local session anyway");
            }
        }
        self.store.clear()
    }

    /// Forget the local session without calling the API.
    pub fn clear(&self) -> Result<(), ClientError> {
        self.store.clear()
    }

    /// Clear the session when the API refused it, then hand the error back.
    pub fn check(&self, err: ClientError) -> ClientError {
        if err.is_unauthorized() {
            if let Err(clear_err) = self.store.clear() {
                tracing::warn!(error = %clear_err, "Failed to clear admin session");
            }
            return ClientError::LoggedOut;
        }
        err
    }
}
