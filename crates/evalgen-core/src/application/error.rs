//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! A record that fails validation is reported as
//! [`ApplicationError::ValidationFailed`] carrying the full problem list.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ValidationResult;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The record or request did not pass validation.
    #[error("The following fields have errors: {0}")]
    ValidationFailed(ValidationResult),

    /// Nothing was requested, so there is nothing to generate.
    #[error("No documents selected for generation")]
    NothingRequested,

    /// The evaluation questions file is missing.
    #[error("Evaluation questions not found at {path}")]
    QuestionsNotFound { path: PathBuf },

    /// The spreadsheet chosen for a new row does not exist.
    #[error("Spreadsheet not found at {path}")]
    SpreadsheetNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Sheet writing failed.
    #[error("Failed to write sheet to {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// Adapter state was poisoned.
    #[error("Adapter lock poisoned")]
    LockError,

    /// The comment sheet already exists and overwriting was not allowed.
    #[error("Document already exists at {path}")]
    DocumentExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed(result) => {
                let mut suggestions: Vec<String> =
                    result.iter().map(|p| format!("  • {p}")).collect();
                suggestions.push("Correct the fields above and try again".into());
                suggestions
            }
            Self::NothingRequested => vec![
                "Select at least one of --comment-sheet, --oit-sheet, --spreadsheet".into(),
            ],
            Self::QuestionsNotFound { path } => vec![
                format!("Unable to open questions for evaluation sheet: {}", path.display()),
                "Set paths.questions_file in your config file".into(),
                "Or pass --questions <FILE>".into(),
            ],
            Self::SpreadsheetNotFound { path } => vec![
                format!("No spreadsheet at: {}", path.display()),
                "Choose an existing .csv file".into(),
                "Or use --spreadsheet new to create one".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Could not save: {}", path.display()),
                "Make sure the document is not already open in another program".into(),
            ],
            Self::LockError => vec!["Try again in a moment".into()],
            Self::DocumentExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --yes to overwrite it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationFailed(_) | Self::NothingRequested => ErrorCategory::Validation,
            Self::DocumentExists { .. } => ErrorCategory::Validation,
            Self::QuestionsNotFound { .. } | Self::SpreadsheetNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::FilesystemError { .. } | Self::WriteFailed { .. } => ErrorCategory::Internal,
            Self::LockError => ErrorCategory::Internal,
        }
    }
}
