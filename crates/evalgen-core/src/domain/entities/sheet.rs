//! Content model for the generated sheets.
//!
//! A [`Sheet`] is a title followed by bordered tables of styled cells. It
//! says *what* goes on the page; turning it into a Word document (or any
//! other format) is the job of a `SheetWriter` adapter.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::course_record::CourseRecord;

/// Width (twentieths of a point) of a label cell.
pub const SHORT_CELL_WIDTH: u32 = 2000;
/// Width of the course subject & number label, which needs more room.
pub const WIDE_LABEL_WIDTH: u32 = 3000;
/// Width of a value cell.
pub const LONG_CELL_WIDTH: u32 = 6250;
/// Width of a full-row question or answer cell.
pub const FULL_ROW_WIDTH: u32 = 10000;
/// Font size in half-points.
pub const FONT_SIZE: u32 = 20;

pub const COMMENT_SHEET_TITLE: &str = "Student Feedback to Instructor";
pub const OIT_SHEET_TITLE: &str = "OIT Scan Cover Sheet";

/// Date format printed on the OIT sheet.
pub const REQUEST_DATE_FORMAT: &str = "%m/%d/%Y";

/// Which artifact a sheet is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    CommentSheet,
    OitScanSheet,
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommentSheet => f.write_str("comment sheet"),
            Self::OitScanSheet => f.write_str("OIT scan sheet"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetCell {
    pub text: String,
    pub bold: bool,
    pub width: u32,
    pub font_size: u32,
}

impl SheetCell {
    pub fn label(text: impl Into<String>, width: u32) -> Self {
        Self {
            text: text.into(),
            bold: true,
            width,
            font_size: FONT_SIZE,
        }
    }

    pub fn value(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            width: LONG_CELL_WIDTH,
            font_size: FONT_SIZE,
        }
    }

    /// Empty, unstyled cell left for handwriting.
    pub fn blank(width: u32) -> Self {
        Self {
            text: String::new(),
            bold: false,
            width,
            font_size: FONT_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SheetRow {
    pub cells: Vec<SheetCell>,
}

impl SheetRow {
    /// Bold label next to a plain value.
    pub fn labelled(label: &str, label_width: u32, value: impl Into<String>) -> Self {
        Self {
            cells: vec![SheetCell::label(label, label_width), SheetCell::value(value)],
        }
    }
}

/// A bordered table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SheetTable {
    pub rows: Vec<SheetRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    pub kind: SheetKind,
    pub title: String,
    pub tables: Vec<SheetTable>,
}

impl Sheet {
    /// Comment sheet: course header table, then one table per question
    /// with an empty row underneath for the handwritten answer.
    pub fn comment_sheet(record: &CourseRecord, questions: &[String]) -> Self {
        let mut tables = vec![SheetTable {
            rows: course_header_rows(record),
        }];

        tables.extend(questions.iter().map(|question| SheetTable {
            rows: vec![
                SheetRow {
                    cells: vec![SheetCell::label(question.as_str(), FULL_ROW_WIDTH)],
                },
                SheetRow {
                    cells: vec![SheetCell::blank(FULL_ROW_WIDTH)],
                },
            ],
        }));

        Self {
            kind: SheetKind::CommentSheet,
            title: COMMENT_SHEET_TITLE.to_string(),
            tables,
        }
    }

    /// OIT scan cover sheet: course header plus support staff details and
    /// the date of the request.
    pub fn oit_scan_sheet(record: &CourseRecord, requested_on: NaiveDate) -> Self {
        let mut rows = course_header_rows(record);
        rows.extend([
            SheetRow::labelled(
                "Faculty Support Name:",
                SHORT_CELL_WIDTH,
                record.faculty_support_name(),
            ),
            SheetRow::labelled(
                "Faculty Support Extension:",
                SHORT_CELL_WIDTH,
                record.faculty_support_extension(),
            ),
            SheetRow::labelled(
                "I would like the results delivered to mailbox:",
                SHORT_CELL_WIDTH,
                record.mailbox(),
            ),
            SheetRow::labelled(
                "Date of Request:",
                SHORT_CELL_WIDTH,
                requested_on.format(REQUEST_DATE_FORMAT).to_string(),
            ),
        ]);

        Self {
            kind: SheetKind::OitScanSheet,
            title: OIT_SHEET_TITLE.to_string(),
            tables: vec![SheetTable { rows }],
        }
    }

    pub fn row_count(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }
}

fn course_header_rows(record: &CourseRecord) -> Vec<SheetRow> {
    vec![
        SheetRow::labelled(
            "Instructor Name:",
            SHORT_CELL_WIDTH,
            record.instructor_full_name(),
        ),
        SheetRow::labelled(
            "Course Subject & Number:",
            WIDE_LABEL_WIDTH,
            format!("{} {}", record.subject(), record.course_number()),
        ),
        SheetRow::labelled("Section:", SHORT_CELL_WIDTH, record.section()),
        SheetRow::labelled(
            "Semester:",
            SHORT_CELL_WIDTH,
            format!("{} {}", record.semester(), record.year()),
        ),
    ]
}

/// Evaluation questions, one per non-blank line.
pub fn parse_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
