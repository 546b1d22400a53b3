//! Public contact form and its validation rules.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// A contact form submission as typed by a visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl ContactForm {
    /// Trim every field, then apply the form rules.
    ///
    /// Returns the trimmed form so callers store exactly what was checked.
    pub fn into_validated(self) -> Result<Self, CoreError> {
        let form = ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        form.validate()?;
        Ok(form)
    }
}
