//! Member validation

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during member validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    #[error("Username cannot be blank")]
    BlankUsername,

    #[error("Username cannot exceed {0} characters")]
    UsernameTooLong(usize),

    #[error("Age must be between 0 and {0}")]
    AgeOutOfRange(i32),
}

impl From<MemberValidationError> for DomainError {
    fn from(err: MemberValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

const MAX_USERNAME_LENGTH: usize = 100;
const MAX_AGE: i32 = 150;

/// Validate a username
pub fn validate_username(username: &str) -> Result<(), MemberValidationError> {
    if username.trim().is_empty() {
        return Err(MemberValidationError::BlankUsername);
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(MemberValidationError::UsernameTooLong(MAX_USERNAME_LENGTH));
    }

    Ok(())
}

/// Validate an age
pub fn validate_age(age: i32) -> Result<(), MemberValidationError> {
    if !(0..=MAX_AGE).contains(&age) {
        return Err(MemberValidationError::AgeOutOfRange(MAX_AGE));
    }

    Ok(())
}
