use thiserror::Error;

use super::user::ValidationErrors;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {0}")]
    Validation(ValidationErrors),
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{validate_user, UserForm};

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("User '7' not found");
        assert_eq!(error.to_string(), "Not found: User '7' not found");
    }

    #[test]
    fn test_validation_error() {
        let errors = validate_user(&UserForm::default()).unwrap_err();
        let error = DomainError::from(errors);

        assert!(error
            .to_string()
            .starts_with("Validation error: First name must only contain letters."));
    }
}
