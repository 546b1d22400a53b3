//! Repository for the `admin_credentials` singleton.

use folio_core::types::{Timestamp, SINGLETON_ID};
use sqlx::PgPool;

use crate::models::admin::{AdminCredentials, UpsertAdminCredentials};

const COLUMNS: &str =
    "id, username, password_hash, failed_login_count, locked_until, created_at, updated_at";

/// Stores the single administrator's hashed credentials and lockout state.
pub struct AdminCredentialsRepo;

impl AdminCredentialsRepo {
    pub async fn find(pool: &PgPool) -> Result<Option<AdminCredentials>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_credentials WHERE id = $1");
        sqlx::query_as::<_, AdminCredentials>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Replace the username and password hash, clearing any lockout.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertAdminCredentials,
    ) -> Result<AdminCredentials, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_credentials (id, username, password_hash)
             VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE SET
                username = EXCLUDED.username,
                password_hash = EXCLUDED.password_hash,
                failed_login_count = 0,
                locked_until = NULL,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminCredentials>(&query)
            .bind(SINGLETON_ID)
            .bind(&input.username)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Seed the credentials only when none exist. Returns `true` if a row was inserted.
    pub async fn insert_if_absent(
        pool: &PgPool,
        input: &UpsertAdminCredentials,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO admin_credentials (id, username, password_hash)
             VALUES ($1, $2, $3)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(SINGLETON_ID)
        .bind(&input.username)
        .bind(&input.password_hash)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Increment the failed login counter by 1, returning the new count.
    pub async fn increment_failed_login(pool: &PgPool) -> Result<i32, sqlx::Error> {
        let count: (i32,) = sqlx::query_as(
            "UPDATE admin_credentials SET failed_login_count = failed_login_count + 1
             WHERE id = $1
             RETURNING failed_login_count",
        )
        .bind(SINGLETON_ID)
        .fetch_one(pool)
        .await?;
        Ok(count.0)
    }

    /// Lock login until the specified timestamp.
    pub async fn lock(pool: &PgPool, until: Timestamp) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE admin_credentials SET locked_until = $2 WHERE id = $1")
            .bind(SINGLETON_ID)
            .bind(until)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Record a successful login: reset `failed_login_count` to 0 and clear `locked_until`.
    pub async fn record_successful_login(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE admin_credentials SET
                failed_login_count = 0,
                locked_until = NULL
             WHERE id = $1",
        )
        .bind(SINGLETON_ID)
        .execute(pool)
        .await?;
        Ok(())
    }
}
