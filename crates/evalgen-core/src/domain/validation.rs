//! Field validation for a course record against a generation request.
//!
//! [`validate`] walks a fixed checklist and collects *every* problem it
//! finds; it never stops at the first one and never fails. The order of the
//! returned problems is part of the contract because the operator reads
//! them top to bottom:
//!
//! 1. instructor first name, last name
//! 2. subject
//! 3. course number
//! 4. section
//! 5. year
//! 6. comment sheet save location
//! 7. OIT scan sheet fields
//! 8. spreadsheet fields
//!
//! Blank means zero length. A field holding only spaces is not blank.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use serde::Serialize;

use crate::domain::{
    entities::{
        course_record::CourseRecord,
        request::{GenerationRequest, has_spreadsheet_extension},
    },
    value_objects::SpreadsheetMode,
};

// ── Problem model ─────────────────────────────────────────────────────────────

/// Which input a problem refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    InstructorFirstName,
    InstructorLastName,
    Subject,
    CourseNumber,
    Section,
    Year,
    CommentSheetLocation,
    FacultySupportName,
    FacultySupportExtension,
    Mailbox,
    SpreadsheetMode,
    SpreadsheetLocation,
    SpreadsheetFileName,
    SpreadsheetFile,
}

impl Field {
    /// Label used in problem messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InstructorFirstName => "Instructor first name",
            Self::InstructorLastName => "Instructor last name",
            Self::Subject => "Subject",
            Self::CourseNumber => "Course number",
            Self::Section => "Section",
            Self::Year => "Year",
            Self::CommentSheetLocation => "Comment sheet save location",
            Self::FacultySupportName => "Faculty support name",
            Self::FacultySupportExtension => "Extension",
            Self::Mailbox => "Mailbox",
            Self::SpreadsheetMode => "Spreadsheet option",
            Self::SpreadsheetLocation => "Spreadsheet save location",
            Self::SpreadsheetFileName => "Spreadsheet file name",
            Self::SpreadsheetFile => "Spreadsheet file",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProblemKind {
    Blank,
    ContainsNumbers,
    ContainsLetters,
    NotSelected,
    AlreadyExists { path: PathBuf },
    NotSpreadsheet,
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationProblem {
    pub field: Field,
    #[serde(flatten)]
    pub kind: ProblemKind,
}

impl ValidationProblem {
    pub const fn new(field: Field, kind: ProblemKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for ValidationProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.field, &self.kind) {
            (Field::CommentSheetLocation, ProblemKind::NotSelected) => {
                f.write_str("Invalid save location")
            }
            (field, ProblemKind::Blank) => write!(f, "{field} field blank"),
            (field, ProblemKind::ContainsNumbers) => write!(f, "{field} field contains numbers"),
            (field, ProblemKind::ContainsLetters) => write!(f, "{field} field contains letters"),
            (field, ProblemKind::NotSelected) => write!(f, "{field} not selected"),
            (_, ProblemKind::AlreadyExists { path }) => {
                let name = path.file_name().unwrap_or(path.as_os_str());
                write!(f, "A file named '{}' already exists", name.to_string_lossy())
            }
            (field, ProblemKind::NotSpreadsheet) => {
                write!(f, "{field} must be a spreadsheet file")
            }
        }
    }
}

/// Ordered list of problems; empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    problems: Vec<ValidationProblem>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn problems(&self) -> &[ValidationProblem] {
        &self.problems
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationProblem> {
        self.problems.iter()
    }

    /// Human-readable messages in report order.
    pub fn messages(&self) -> Vec<String> {
        self.problems.iter().map(ToString::to_string).collect()
    }

    /// Whether any problem refers to `field`.
    pub fn has(&self, field: Field) -> bool {
        self.problems.iter().any(|p| p.field == field)
    }

    fn push(&mut self, field: Field, kind: ProblemKind) {
        self.problems.push(ValidationProblem::new(field, kind));
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.messages();
        f.write_str(&messages.join("; "))
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationProblem;
    type IntoIter = std::vec::IntoIter<ValidationProblem>;

    fn into_iter(self) -> Self::IntoIter {
        self.problems.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationProblem;
    type IntoIter = std::slice::Iter<'a, ValidationProblem>;

    fn into_iter(self) -> Self::IntoIter {
        self.problems.iter()
    }
}

// ── Character predicates ──────────────────────────────────────────────────────

static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Nd}").expect("decimal digit class is a valid pattern"));

/// Zero-length check. No trimming.
pub fn is_blank(value: &str) -> bool {
    value.is_empty()
}

/// Any alphabetic code point.
pub fn contains_letters(value: &str) -> bool {
    value.chars().any(char::is_alphabetic)
}

/// Any decimal digit (Unicode `Nd`). Fractions, superscripts and roman
/// numerals are not digits.
pub fn contains_numbers(value: &str) -> bool {
    DECIMAL_DIGIT.is_match(value)
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Check `record` against everything `request` asks for.
///
/// `exists` answers whether a path is already taken; it is only consulted
/// for the new-spreadsheet collision check.
pub fn validate<F>(record: &CourseRecord, request: &GenerationRequest, exists: F) -> ValidationResult
where
    F: Fn(&Path) -> bool,
{
    let mut result = ValidationResult::default();

    check_course(record, &mut result);

    if request.want_comment_sheet && request.comment_sheet_dir.is_none() {
        result.push(Field::CommentSheetLocation, ProblemKind::NotSelected);
    }

    if request.want_oit_sheet {
        check_oit(record, &mut result);
    }

    if request.want_spreadsheet_update {
        check_spreadsheet(request, &exists, &mut result);
    }

    result
}

fn check_course(record: &CourseRecord, result: &mut ValidationResult) {
    require(record.instructor_first_name(), Field::InstructorFirstName, result);
    require(record.instructor_last_name(), Field::InstructorLastName, result);

    if is_blank(record.subject()) {
        result.push(Field::Subject, ProblemKind::Blank);
    } else if contains_numbers(record.subject()) {
        result.push(Field::Subject, ProblemKind::ContainsNumbers);
    }

    if is_blank(record.course_number()) {
        result.push(Field::CourseNumber, ProblemKind::Blank);
    } else if contains_letters(record.course_number()) {
        result.push(Field::CourseNumber, ProblemKind::ContainsLetters);
    }

    require(record.section(), Field::Section, result);

    if is_blank(record.year()) {
        result.push(Field::Year, ProblemKind::Blank);
    } else if contains_letters(record.year()) {
        result.push(Field::Year, ProblemKind::ContainsLetters);
    }
}

fn check_oit(record: &CourseRecord, result: &mut ValidationResult) {
    require(record.faculty_support_name(), Field::FacultySupportName, result);
    require(
        record.faculty_support_extension(),
        Field::FacultySupportExtension,
        result,
    );
    require(record.mailbox(), Field::Mailbox, result);
}

fn check_spreadsheet<F>(request: &GenerationRequest, exists: &F, result: &mut ValidationResult)
where
    F: Fn(&Path) -> bool,
{
    match request.spreadsheet_mode {
        SpreadsheetMode::CreateNew => {
            if request.spreadsheet_dir.is_none() {
                result.push(Field::SpreadsheetLocation, ProblemKind::NotSelected);
            }
            if is_blank(&request.spreadsheet_file_name) {
                result.push(Field::SpreadsheetFileName, ProblemKind::Blank);
            } else if let Some(path) = request.new_spreadsheet_path() {
                if exists(&path) {
                    result.push(Field::SpreadsheetFileName, ProblemKind::AlreadyExists { path });
                }
            }
        }
        SpreadsheetMode::UseExisting => match &request.existing_spreadsheet {
            None => result.push(Field::SpreadsheetFile, ProblemKind::NotSelected),
            Some(path) if !has_spreadsheet_extension(path) => {
                result.push(Field::SpreadsheetFile, ProblemKind::NotSpreadsheet)
            }
            Some(_) => {}
        },
        SpreadsheetMode::None => result.push(Field::SpreadsheetMode, ProblemKind::NotSelected),
    }
}

fn require(value: &str, field: Field, result: &mut ValidationResult) {
    if is_blank(value) {
        result.push(field, ProblemKind::Blank);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
