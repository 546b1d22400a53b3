//! Admin credential and admin session models.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The `admin_credentials` singleton row.
///
/// The password hash never leaves the server.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminCredentials {
    pub id: DbId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public view of the admin account. Never carries the hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAccount {
    pub username: String,
    pub updated_at: Timestamp,
}

impl From<&AdminCredentials> for AdminAccount {
    fn from(credentials: &AdminCredentials) -> Self {
        Self {
            username: credentials.username.clone(),
            updated_at: credentials.updated_at,
        }
    }
}

/// DTO for replacing the admin credentials. The password is already hashed.
#[derive(Debug, Clone)]
pub struct UpsertAdminCredentials {
    pub username: String,
    pub password_hash: String,
}

/// A row from the `admin_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSession {
    pub id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a new admin session.
#[derive(Debug, Clone)]
pub struct CreateAdminSession {
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
