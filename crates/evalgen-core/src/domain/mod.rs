// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for evalgen.
//!
//! This module contains pure business logic. All I/O is handled via ports
//! (traits) defined in the application layer; where validation needs to
//! know whether a file exists, the caller passes that answer in.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the application and CLI
//! - **Immutable entities**: `CourseRecord` has no setters
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    course_record::{CourseForm, CourseRecord},
    request::{
        GenerationRequest, GenerationRequestBuilder, SPREADSHEET_EXTENSION,
        has_spreadsheet_extension, spreadsheet_file_name,
    },
    sheet::{Sheet, SheetCell, SheetKind, SheetRow, SheetTable, parse_questions},
    spreadsheet::{SPREADSHEET_COLUMNS, SpreadsheetRow},
};

pub use error::{DomainError, ErrorCategory};

pub use naming::canonical_file_name;

pub use validation::{
    Field, ProblemKind, ValidationProblem, ValidationResult, contains_letters, contains_numbers,
    is_blank, validate,
};

pub use value_objects::{Semester, SpreadsheetMode};

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    fn smith() -> CourseForm {
        CourseForm::new(Semester::Fall)
            .instructor("John", "Smith")
            .course("cst", "123", "wn123")
            .year("2014")
    }

    // ========================================================================
    // End-to-end domain scenarios
    // ========================================================================

    #[test]
    fn comment_sheet_scenario_is_valid_and_named() {
        let record = CourseRecord::from_form(smith());
        let request = GenerationRequest::builder()
            .comment_sheet(Some("/evals"))
            .build();

        assert!(validate(&record, &request, |_| false).is_valid());
        assert_eq!(
            canonical_file_name(&record),
            "Smith_John CST 123-WN123 Fall 2014.docx"
        );
    }

    #[test]
    fn lowercase_subject_is_stored_uppercase() {
        let record = CourseRecord::from_form(smith());
        assert_eq!(record.subject(), "CST");
    }

    #[test]
    fn oit_scenario_reports_only_missing_support_name() {
        let record = CourseRecord::from_form(smith().support("", "4021", "B12"));
        let request = GenerationRequest::builder()
            .comment_sheet(Some("/evals"))
            .oit_sheet()
            .build();

        let result = validate(&record, &request, |_| false);
        assert_eq!(result.len(), 1);
        assert!(result.has(Field::FacultySupportName));
    }

    #[test]
    fn collision_scenario() {
        let record = CourseRecord::from_form(smith());
        let request = GenerationRequest::builder()
            .new_spreadsheet(Some("/sheets"), "newclasses")
            .build();
        let existing = PathBuf::from("/sheets/newclasses.csv");

        let result = validate(&record, &request, |p: &Path| p == existing);
        assert_eq!(
            result.problems()[0].kind,
            ProblemKind::AlreadyExists { path: existing }
        );
    }

    #[test]
    fn text_file_scenario() {
        let record = CourseRecord::from_form(smith());
        let request = GenerationRequest::builder()
            .existing_spreadsheet(Some("/sheets/classes.txt"))
            .build();

        let result = validate(&record, &request, |_| false);
        assert!(result.messages()[0].ends_with("must be a spreadsheet file"));
    }
}
