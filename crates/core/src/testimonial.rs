//! Testimonial rating bounds and field validation.

use crate::error::CoreError;
use crate::validation::{reject_blank_updates, require_fields};

/// Lowest accepted star rating.
pub const MIN_RATING: i16 = 1;

/// Highest accepted star rating, also the default for new testimonials.
pub const MAX_RATING: i16 = 5;

/// Validate that `rating` is within `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// A new testimonial needs a client name, the quote and its project context.
pub fn validate_new_testimonial(
    client_name: &str,
    content: &str,
    project_context: &str,
    rating: Option<i16>,
) -> Result<(), CoreError> {
    require_fields(&[
        ("client_name", client_name),
        ("content", content),
        ("project_context", project_context),
    ])?;
    if let Some(r) = rating {
        validate_rating(r)?;
    }
    Ok(())
}

/// Partial updates may omit required fields but never blank them.
pub fn validate_testimonial_update(
    client_name: Option<&str>,
    content: Option<&str>,
    project_context: Option<&str>,
    rating: Option<i16>,
) -> Result<(), CoreError> {
    reject_blank_updates(&[
        ("client_name", client_name),
        ("content", content),
        ("project_context", project_context),
    ])?;
    if let Some(r) = rating {
        validate_rating(r)?;
    }
    Ok(())
}
