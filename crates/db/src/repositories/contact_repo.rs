//! Repository for the `contact_submissions` table.

use folio_core::contact::ContactForm;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::ContactSubmission;

const COLUMNS: &str = "id, name, email, message, is_read, created_at";

/// Stores inbound contact form submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Persist a validated contact form. New submissions are unread.
    pub async fn create(
        pool: &PgPool,
        form: &ContactForm,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_submissions (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&form.name)
            .bind(&form.email)
            .bind(&form.message)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_submissions WHERE id = $1");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all submissions, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM contact_submissions ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .fetch_all(pool)
            .await
    }

    /// Set the read flag. Marking an already-read submission read again is a no-op.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_read(
        pool: &PgPool,
        id: DbId,
        is_read: bool,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_submissions SET is_read = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .bind(is_read)
            .fetch_optional(pool)
            .await
    }

    /// Delete a submission. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
