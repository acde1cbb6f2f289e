//! Input validation for contact fields and identifiers.

use std::fmt;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent from the input.
    Missing(String),
    /// Empty value where one is required.
    Empty(String),
    /// Identifier outside the range the store assigns.
    InvalidId(i64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Missing(field) => write!(f, "{} is required", field),
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
            ValidationError::InvalidId(id) => write!(f, "Invalid id: {} (must be positive)", id),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a required text field and return its value.
///
/// A value consisting only of whitespace counts as empty. The returned value is
/// not trimmed.
pub fn validate_required(field: &str, value: Option<&str>) -> Result<String, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::Missing(field.to_string()))?;

    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field.to_string()));
    }

    Ok(value.to_string())
}

/// Validate a record identifier. Store-assigned IDs start at 1.
pub fn validate_id(id: i64) -> Result<i64, ValidationError> {
    if id <= 0 {
        return Err(ValidationError::InvalidId(id));
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_valid() {
        assert_eq!(validate_required("firstName", Some("John")).unwrap(), "John");
        assert_eq!(validate_required("phoneNumber", Some(" 555 ")).unwrap(), " 555 ");
    }

    #[test]
    fn test_validate_required_invalid() {
        // Absent
        assert_eq!(
            validate_required("lastName", None),
            Err(ValidationError::Missing("lastName".to_string()))
        );

        // Empty
        assert!(matches!(
            validate_required("lastName", Some("")),
            Err(ValidationError::Empty(_))
        ));

        // Whitespace only
        assert!(matches!(
            validate_required("lastName", Some("   ")),
            Err(ValidationError::Empty(_))
        ));
    }

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id(1), Ok(1));
        assert_eq!(validate_id(i64::MAX), Ok(i64::MAX));
        assert_eq!(validate_id(0), Err(ValidationError::InvalidId(0)));
        assert_eq!(validate_id(-5), Err(ValidationError::InvalidId(-5)));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::Empty("firstName".to_string());
        assert_eq!(err.to_string(), "firstName cannot be empty");

        let err = ValidationError::InvalidId(-1);
        assert_eq!(err.to_string(), "Invalid id: -1 (must be positive)");
    }
}
