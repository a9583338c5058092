// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Validation problems with a course record are *not* errors; they are data
/// returned in a [`ValidationResult`](crate::domain::ValidationResult). This
/// type only covers values that cannot be represented at all.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown semester: {0}")]
    UnknownSemester(String),

    #[error("unknown spreadsheet mode: {0}")]
    UnknownSpreadsheetMode(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownSemester(value) => vec![
                format!("'{}' is not a semester", value),
                "Use one of: Fall, Winter, Spring, Summer".into(),
            ],
            Self::UnknownSpreadsheetMode(value) => vec![
                format!("'{}' is not a spreadsheet mode", value),
                "Use one of: existing, new".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownSemester(_) | Self::UnknownSpreadsheetMode(_) => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
