//! Circle validation utilities

use thiserror::Error;

/// Errors that can occur during circle validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CircleValidationError {
    #[error("Circle ID cannot be empty")]
    EmptyId,

    #[error("Circle name cannot be empty")]
    EmptyName,

    #[error("Circle name is too short. Minimum length is {0} characters")]
    NameTooShort(usize),

    #[error("Circle name exceeds maximum length of {0} characters")]
    NameTooLong(usize),
}

const MIN_CIRCLE_NAME_LENGTH: usize = 3;
const MAX_CIRCLE_NAME_LENGTH: usize = 20;

/// Validate a circle ID
pub fn validate_circle_id(id: &str) -> Result<(), CircleValidationError> {
    if id.is_empty() {
        return Err(CircleValidationError::EmptyId);
    }

    Ok(())
}

/// Validate a circle name
///
/// Rules:
/// - Cannot be empty
/// - Between 3 and 20 characters inclusive
pub fn validate_circle_name(name: &str) -> Result<(), CircleValidationError> {
    if name.is_empty() {
        return Err(CircleValidationError::EmptyName);
    }

    if name.len() < MIN_CIRCLE_NAME_LENGTH {
        return Err(CircleValidationError::NameTooShort(MIN_CIRCLE_NAME_LENGTH));
    }

    if name.len() > MAX_CIRCLE_NAME_LENGTH {
        return Err(CircleValidationError::NameTooLong(MAX_CIRCLE_NAME_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_circle_names() {
        assert!(validate_circle_name("abc").is_ok());
        assert!(validate_circle_name("book club").is_ok());
        assert!(validate_circle_name(&"a".repeat(20)).is_ok());
    }

    #[test]
    fn test_empty_circle_name() {
        assert_eq!(
            validate_circle_name(""),
            Err(CircleValidationError::EmptyName)
        );
    }

    #[test]
    fn test_circle_name_too_short() {
        assert_eq!(
            validate_circle_name("ab"),
            Err(CircleValidationError::NameTooShort(3))
        );
    }

    #[test]
    fn test_circle_name_too_long() {
        assert_eq!(
            validate_circle_name(&"a".repeat(21)),
            Err(CircleValidationError::NameTooLong(20))
        );
    }

    #[test]
    fn test_circle_id() {
        assert!(validate_circle_id("c-1").is_ok());
        assert_eq!(validate_circle_id(""), Err(CircleValidationError::EmptyId));
    }
}
