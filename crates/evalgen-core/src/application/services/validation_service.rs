//! Validation Service - binds the pure validation engine to the filesystem.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{self, CourseRecord, GenerationRequest, ValidationResult},
};

/// Runs every check for a record and request, asking the filesystem port
/// whether a new spreadsheet would collide with an existing file.
#[derive(Clone)]
pub struct ValidationService {
    filesystem: Arc<dyn Filesystem>,
}

impl ValidationService {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Collect all problems. Never fails: problems are data.
    #[instrument(skip_all, fields(course = %record))]
    pub fn validate(&self, record: &CourseRecord, request: &GenerationRequest) -> ValidationResult {
        let result = domain::validate(record, request, |path| self.filesystem.exists(path));
        debug!(problems = result.len(), "Validation finished");
        result
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{CourseForm, Field, ProblemKind, Semester};

    fn smith() -> CourseRecord {
        CourseForm::new(Semester::Fall)
            .instructor("John", "Smith")
            .course("cst", "123", "wn123")
            .year("2014")
            .into()
    }

    #[test]
    fn course_only_request_never_touches_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();

        let service = ValidationService::new(Arc::new(fs));
        let result = service.validate(&smith(), &GenerationRequest::default());

        assert!(result.is_valid());
    }

    #[test]
    fn new_spreadsheet_collision_uses_filesystem_probe() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|path| path == Path::new("/tmp/evals/newclasses.csv"))
            .times(1)
            .return_const(true);

        let request = GenerationRequest::builder()
            .new_spreadsheet(Some("/tmp/evals"), "newclasses")
            .build();

        let service = ValidationService::new(Arc::new(fs));
        let result = service.validate(&smith(), &request);

        assert_eq!(result.len(), 1);
        let problem = &result.problems()[0];
        assert_eq!(problem.field, Field::SpreadsheetFileName);
        assert!(matches!(problem.kind, ProblemKind::AlreadyExists { .. }));
        assert!(problem.to_string().contains("newclasses.csv' already exists"));
    }

    #[test]
    fn free_spreadsheet_name_is_valid() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);

        let request = GenerationRequest::builder()
            .new_spreadsheet(Some("/tmp/evals"), "newclasses.csv")
            .build();

        let service = ValidationService::new(Arc::new(fs));
        assert!(service.validate(&smith(), &request).is_valid());
    }
}
