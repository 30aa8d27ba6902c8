//! Team validation

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TeamValidationError {
    #[error("Team name cannot be blank")]
    BlankName,

    #[error("Team name cannot exceed {0} characters")]
    NameTooLong(usize),
}

impl From<TeamValidationError> for DomainError {
    fn from(err: TeamValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Validate a team name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.trim().is_empty() {
        return Err(TeamValidationError::BlankName);
    }

    if name.len() > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_team_name() {
        assert!(validate_team_name("teamA").is_ok());
        assert!(validate_team_name("Platform Engineering").is_ok());
    }

    #[test]
    fn test_blank_team_name() {
        assert_eq!(validate_team_name(""), Err(TeamValidationError::BlankName));
        assert_eq!(validate_team_name("  "), Err(TeamValidationError::BlankName));
    }

    #[test]
    fn test_team_name_too_long() {
        let name = "a".repeat(101);
        assert_eq!(
            validate_team_name(&name),
            Err(TeamValidationError::NameTooLong(100))
        );
    }
}
