//! Contact submission model.
//!
//! Submissions are created from [`folio_core::contact::ContactForm`]; the only
//! mutation afterwards is the read flag.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}
