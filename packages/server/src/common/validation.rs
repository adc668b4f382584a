//! Field-level validation rules evaluated at the service boundary.
//!
//! Each rule either returns the normalized value or a
//! [`DomainError::Validation`] naming the offending field.

use super::{DomainError, DomainResult};

/// Required text: must contain something other than whitespace.
/// Returns the trimmed value.
pub fn required_text(field: &'static str, label: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, format!("{} is required", label)));
    }
    Ok(trimmed.to_string())
}

/// Text that may be omitted from an update but must not be blanked out.
pub fn non_blank_update(
    field: &'static str,
    label: &str,
    value: Option<&str>,
) -> DomainResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Err(DomainError::validation(
            field,
            format!("{} cannot be empty", label),
        )),
        Some(v) => Ok(Some(v.trim().to_string())),
    }
}

/// Optional text: trimmed when present.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Membership in a closed set, via the type's `FromStr`.
pub fn one_of<T: std::str::FromStr>(field: &'static str, value: &str) -> DomainResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| DomainError::validation(field, format!("Invalid {}: {}", field, value)))
}

/// Positive integer, used for pagination arguments.
pub fn positive(field: &'static str, value: i64) -> DomainResult<usize> {
    if value < 1 {
        return Err(DomainError::validation(
            field,
            format!("{} must be a positive integer", field),
        ));
    }
    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims() {
        assert_eq!(required_text("title", "Title", "  hi  ").unwrap(), "hi");
    }

    #[test]
    fn required_text_rejects_whitespace() {
        let err = required_text("title", "Title", " \t\n").unwrap_err();
        assert_eq!(err.to_string(), "Title is required");
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn non_blank_update_passes_through_absent() {
        assert_eq!(non_blank_update("title", "Title", None).unwrap(), None);
    }

    #[test]
    fn non_blank_update_rejects_blank() {
        let err = non_blank_update("description", "Description", Some("   ")).unwrap_err();
        assert_eq!(err.to_string(), "Description cannot be empty");
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(positive("page", 0).is_err());
        assert!(positive("limit", -3).is_err());
        assert_eq!(positive("page", 4).unwrap(), 4);
    }

    #[test]
    fn one_of_reports_field() {
        let err = one_of::<u8>("status", "nope").unwrap_err();
        assert_eq!(err.field(), Some("status"));
    }
}
