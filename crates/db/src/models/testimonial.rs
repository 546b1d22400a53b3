//! Testimonial entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A testimonial row from the `testimonials` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: DbId,
    pub client_name: String,
    pub client_title: String,
    pub content: String,
    pub rating: i16,
    pub project_context: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new testimonial. Missing text fields deserialize as
/// empty so validation can name them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTestimonial {
    pub client_name: String,
    pub client_title: String,
    pub content: String,
    /// Defaults to 5 if omitted.
    pub rating: Option<i16>,
    pub project_context: String,
}

/// DTO for updating an existing testimonial. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTestimonial {
    pub client_name: Option<String>,
    pub client_title: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i16>,
    pub project_context: Option<String>,
}
