//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User name cannot be empty")]
    EmptyName,

    #[error("User name is too short. Minimum length is {0} characters")]
    NameTooShort(usize),
}

const MIN_USER_NAME_LENGTH: usize = 3;

/// Validate a user ID
///
/// Any non-empty string is accepted; ids assigned by the factory are numeric
/// but stored ids are not required to be.
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    Ok(())
}

/// Validate a user name
///
/// Rules:
/// - Cannot be empty
/// - Minimum 3 characters
pub fn validate_user_name(name: &str) -> Result<(), UserValidationError> {
    if name.is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    if name.len() < MIN_USER_NAME_LENGTH {
        return Err(UserValidationError::NameTooShort(MIN_USER_NAME_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_ids() {
        assert!(validate_user_id("1").is_ok());
        assert!(validate_user_id("abc").is_ok());
    }

    #[test]
    fn test_empty_user_id() {
        assert_eq!(validate_user_id(""), Err(UserValidationError::EmptyId));
    }

    #[test]
    fn test_valid_user_names() {
        assert!(validate_user_name("username").is_ok());
        assert!(validate_user_name("aiu").is_ok());
    }

    #[test]
    fn test_empty_user_name() {
        assert_eq!(validate_user_name(""), Err(UserValidationError::EmptyName));
    }

    #[test]
    fn test_user_name_too_short() {
        assert_eq!(
            validate_user_name("ai"),
            Err(UserValidationError::NameTooShort(3))
        );
        assert_eq!(
            validate_user_name("a"),
            Err(UserValidationError::NameTooShort(3))
        );
    }
}
