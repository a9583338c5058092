//! The `CourseRecord` value and the raw `CourseForm` it is built from.
//!
//! A `CourseForm` is exactly what the operator typed: no trimming, no case
//! changes. `CourseRecord::from_form` applies the one and only normalization
//! step (uppercasing subject and section) and freezes the result. There are
//! no setters, so a record can never be seen half-normalized.
//!
//! A record is *canonical*, not *valid*: whether its fields satisfy the
//! rules for a given set of artifacts is decided by
//! [`validate`](crate::domain::validation::validate).
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Semester;

// ── Raw input ─────────────────────────────────────────────────────────────────

/// Raw course and support-staff fields, one per input box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseForm {
    pub instructor_first_name: String,
    pub instructor_last_name: String,
    pub subject: String,
    pub course_number: String,
    pub section: String,
    pub year: String,
    pub semester: Semester,
    pub faculty_support_name: String,
    pub faculty_support_extension: String,
    pub mailbox: String,
}

impl CourseForm {
    /// An empty form for the given semester.
    pub fn new(semester: Semester) -> Self {
        Self {
            instructor_first_name: String::new(),
            instructor_last_name: String::new(),
            subject: String::new(),
            course_number: String::new(),
            section: String::new(),
            year: String::new(),
            semester,
            faculty_support_name: String::new(),
            faculty_support_extension: String::new(),
            mailbox: String::new(),
        }
    }

    pub fn instructor(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.instructor_first_name = first.into();
        self.instructor_last_name = last.into();
        self
    }

    pub fn course(
        mut self,
        subject: impl Into<String>,
        number: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        self.subject = subject.into();
        self.course_number = number.into();
        self.section = section.into();
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn support(
        mut self,
        name: impl Into<String>,
        extension: impl Into<String>,
        mailbox: impl Into<String>,
    ) -> Self {
        self.faculty_support_name = name.into();
        self.faculty_support_extension = extension.into();
        self.mailbox = mailbox.into();
        self
    }
}

// ── Canonical record ──────────────────────────────────────────────────────────

/// Immutable, normalized course/instructor/support identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CourseRecord {
    instructor_first_name: String,
    instructor_last_name: String,
    subject: String,
    course_number: String,
    section: String,
    year: String,
    semester: Semester,
    faculty_support_name: String,
    faculty_support_extension: String,
    mailbox: String,
}

impl CourseRecord {
    /// Normalize a raw form into a canonical record.
    ///
    /// Subject and section are uppercased; every other field is taken as-is.
    pub fn from_form(form: CourseForm) -> Self {
        Self {
            instructor_first_name: form.instructor_first_name,
            instructor_last_name: form.instructor_last_name,
            subject: form.subject.to_uppercase(),
            course_number: form.course_number,
            section: form.section.to_uppercase(),
            year: form.year,
            semester: form.semester,
            faculty_support_name: form.faculty_support_name,
            faculty_support_extension: form.faculty_support_extension,
            mailbox: form.mailbox,
        }
    }

    pub fn instructor_first_name(&self) -> &str {
        &self.instructor_first_name
    }
    pub fn instructor_last_name(&self) -> &str {
        &self.instructor_last_name
    }
    pub fn subject(&self) -> &str {
        &self.subject
    }
    pub fn course_number(&self) -> &str {
        &self.course_number
    }
    pub fn section(&self) -> &str {
        &self.section
    }
    pub fn year(&self) -> &str {
        &self.year
    }
    pub const fn semester(&self) -> Semester {
        self.semester
    }
    pub fn faculty_support_name(&self) -> &str {
        &self.faculty_support_name
    }
    pub fn faculty_support_extension(&self) -> &str {
        &self.faculty_support_extension
    }
    pub fn mailbox(&self) -> &str {
        &self.mailbox
    }

    /// `"First Last"`, as printed on the sheets.
    pub fn instructor_full_name(&self) -> String {
        format!(
            "{} {}",
            self.instructor_first_name, self.instructor_last_name
        )
    }
}

impl From<CourseForm> for CourseRecord {
    fn from(form: CourseForm) -> Self {
        Self::from_form(form)
    }
}

impl fmt::Display for CourseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {} {} ({})",
            self.subject,
            self.course_number,
            self.section,
            self.semester,
            self.year,
            self.instructor_full_name()
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CourseForm {
        CourseForm::new(Semester::Fall)
            .instructor("John", "Smith")
            .course("cst", "123", "wn123")
            .year("2014")
    }

    #[test]
    fn subject_and_section_are_uppercased() {
        let record = CourseRecord::from_form(form());
        assert_eq!(record.subject(), "CST");
        assert_eq!(record.section(), "WN123");
    }

    #[test]
    fn other_fields_are_untouched() {
        let record = CourseRecord::from_form(
            form()
                .instructor(" john", "smith ")
                .support("jane doe", "x42", "b7"),
        );
        assert_eq!(record.instructor_first_name(), " john");
        assert_eq!(record.instructor_last_name(), "smith ");
        assert_eq!(record.course_number(), "123");
        assert_eq!(record.year(), "2014");
        assert_eq!(record.faculty_support_name(), "jane doe");
        assert_eq!(record.faculty_support_extension(), "x42");
        assert_eq!(record.mailbox(), "b7");
    }

    #[test]
    fn normalization_is_stable() {
        let once = CourseRecord::from_form(form());
        let again = CourseRecord::from_form(CourseForm {
            subject: once.subject().to_string(),
            section: once.section().to_string(),
            ..form()
        });
        assert_eq!(once, again);
    }

    #[test]
    fn display_summarises_course() {
        let record = CourseRecord::from(form());
        assert_eq!(record.to_string(), "CST 123-WN123 Fall 2014 (John Smith)");
    }
}
