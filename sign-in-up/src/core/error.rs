//! # Common Error Types
//!
//! Consolidated error handling for the sign-in / sign-up component.
//!
//! ## Error Categories
//!
//! - **FieldInvalid**: a form failed client-side validation. Recovered locally:
//!   submission is suppressed and field errors become visible.
//! - **SubmissionFailed**: the authentication or registration collaborator
//!   reported a failure. Surfaced as an inline banner under the form.
//! - **Config**: an environment setting could not be used.
//!
//! None of these originate a panic; malformed user input only ever produces
//! `FieldInvalid`.

use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use sign_in_up::core::error::AppError;
///
/// let err = AppError::FieldInvalid("email, password".to_string());
/// assert_eq!(err.to_string(), "Invalid fields: email, password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// One or more fields of the submitted form failed validation.
    ///
    /// Carries the comma-separated names of the invalid fields.
    #[error("Invalid fields: {0}")]
    FieldInvalid(String),

    /// The authentication or registration collaborator returned an error.
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// A configuration value could not be applied.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Build a [`AppError::FieldInvalid`] from the names of the failing fields.
    pub fn invalid_fields(fields: &[&str]) -> Self {
        AppError::FieldInvalid(fields.join(", "))
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fields_lists_names() {
        let err = AppError::invalid_fields(&["name", "birth_date"]);
        assert_eq!(err, AppError::FieldInvalid("name, birth_date".to_string()));
        assert_eq!(err.to_string(), "Invalid fields: name, birth_date");
    }

    #[test]
    fn test_submission_failed_display() {
        let err = AppError::SubmissionFailed("Email already registered".to_string());
        assert_eq!(err.to_string(), "Submission failed: Email already registered");
    }
}
