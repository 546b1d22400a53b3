//! Required-field checks shared by the content resources.

use crate::error::CoreError;

/// Message returned whenever one or more required fields are blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Return the names of every `(name, value)` pair whose value is blank
/// after trimming.
pub fn blank_fields<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

/// Fail with a validation error naming every blank required field.
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), CoreError> {
    let missing = blank_fields(fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{MISSING_FIELDS_MESSAGE}: {}",
            missing.join(", ")
        )))
    }
}

/// For partial updates: a field that is present must not be blank.
pub fn reject_blank_updates(fields: &[(&str, Option<&str>)]) -> Result<(), CoreError> {
    let present: Vec<(&str, &str)> = fields
        .iter()
        .filter_map(|(name, value)| value.map(|v| (*name, v)))
        .collect();
    require_fields(&present)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn all_present_passes() {
        assert!(require_fields(&[("title", "A"), ("description", "B")]).is_ok());
    }

    #[test]
    fn whitespace_counts_as_blank() {
        let err = require_fields(&[("title", "  "), ("description", "ok"), ("image_url", "")])
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.ends_with("title, image_url"));
    }

    #[test]
    fn absent_update_fields_are_ignored() {
        assert!(reject_blank_updates(&[("title", None), ("description", Some("x"))]).is_ok());
        assert!(reject_blank_updates(&[("title", Some(" "))]).is_err());
    }
}
