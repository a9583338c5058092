//! Unified error handling for evalgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for evalgen core operations.
#[derive(Debug, Error, Clone)]
pub enum EvalError {
    /// Errors from the domain layer.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl EvalError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in evalgen".into(),
                "Please report this issue at: https://github.com/cosecruz/evalgen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The validation problems, if this error is a failed validation.
    pub fn validation_problems(&self) -> Option<&crate::domain::ValidationResult> {
        match self {
            Self::Application(ApplicationError::ValidationFailed(result)) => Some(result),
            _ => None,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::LockError))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type EvalResult<T> = Result<T, EvalError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> EvalResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> EvalResult<T> {
        self.map_err(|e| EvalError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Field, ValidationResult};

    #[test]
    fn validation_failure_is_a_validation_category() {
        let err: EvalError = ApplicationError::ValidationFailed(ValidationResult::default()).into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.validation_problems().is_some());
    }

    #[test]
    fn validation_failure_suggestions_list_every_problem() {
        let result = crate::domain::validate(
            &crate::domain::CourseRecord::from_form(crate::domain::CourseForm::new(
                crate::domain::Semester::Fall,
            )),
            &Default::default(),
            |_| false,
        );
        assert!(result.has(Field::Year));
        let count = result.len();

        let err: EvalError = ApplicationError::ValidationFailed(result).into();
        assert_eq!(err.suggestions().len(), count + 1);
        assert!(err.suggestions()[0].contains("Instructor first name"));
    }

    #[test]
    fn unknown_semester_is_validation() {
        let err: EvalError = DomainError::UnknownSemester("autumn".into()).into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.is_retryable());
    }

    #[test]
    fn context_wraps_as_internal() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = io.context("reading questions").unwrap_err();
        assert!(matches!(err, EvalError::Internal { .. }));
        assert!(err.to_string().contains("reading questions: boom"));
    }
}
