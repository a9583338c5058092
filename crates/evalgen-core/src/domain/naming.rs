//! Canonical document naming.
//!
//! The comment sheet for a course is always saved under the same name, so
//! re-running generation for the same course lands on the same file and the
//! overwrite check has something stable to compare against.

use crate::domain::entities::course_record::CourseRecord;

/// File extension of the generated comment sheet.
pub const COMMENT_SHEET_EXTENSION: &str = "docx";

/// `"{last}_{first} {subject} {number}-{section} {semester} {year}.docx"`
pub fn canonical_file_name(record: &CourseRecord) -> String {
    format!(
        "{}_{} {} {}-{} {} {}.{}",
        record.instructor_last_name(),
        record.instructor_first_name(),
        record.subject(),
        record.course_number(),
        record.section(),
        record.semester(),
        record.year(),
        COMMENT_SHEET_EXTENSION,
    )
}

impl CourseRecord {
    /// See [`canonical_file_name`].
    pub fn canonical_file_name(&self) -> String {
        canonical_file_name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{entities::course_record::CourseForm, value_objects::Semester};

    fn smith() -> CourseRecord {
        CourseRecord::from_form(
            CourseForm::new(Semester::Fall)
                .instructor("John", "Smith")
                .course("cst", "123", "wn123")
                .year("2014"),
        )
    }

    #[test]
    fn name_uses_normalized_fields() {
        assert_eq!(
            canonical_file_name(&smith()),
            "Smith_John CST 123-WN123 Fall 2014.docx"
        );
    }

    #[test]
    fn name_is_deterministic() {
        let record = smith();
        assert_eq!(record.canonical_file_name(), record.canonical_file_name());
        assert_eq!(canonical_file_name(&record), canonical_file_name(&smith()));
    }

    #[test]
    fn semester_changes_name() {
        let spring = CourseRecord::from_form(
            CourseForm::new(Semester::Spring)
                .instructor("John", "Smith")
                .course("cst", "123", "wn123")
                .year("2014"),
        );
        assert_eq!(
            spring.canonical_file_name(),
            "Smith_John CST 123-WN123 Spring 2014.docx"
        );
    }
}
