//! One course as a spreadsheet row.

use serde::Serialize;

use crate::domain::entities::course_record::CourseRecord;

/// Column headings, in row order.
pub const SPREADSHEET_COLUMNS: [&str; 10] = [
    "Last Name",
    "First Name",
    "Subject",
    "Course Number",
    "Section",
    "Semester",
    "Year",
    "Faculty Support",
    "Extension",
    "Mailbox",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpreadsheetRow {
    cells: Vec<String>,
}

impl SpreadsheetRow {
    pub fn from_record(record: &CourseRecord) -> Self {
        Self {
            cells: vec![
                record.instructor_last_name().to_string(),
                record.instructor_first_name().to_string(),
                record.subject().to_string(),
                record.course_number().to_string(),
                record.section().to_string(),
                record.semester().to_string(),
                record.year().to_string(),
                record.faculty_support_name().to_string(),
                record.faculty_support_extension().to_string(),
                record.mailbox().to_string(),
            ],
        }
    }

    pub fn header() -> Self {
        Self {
            cells: SPREADSHEET_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// The row as one CSV line, newline included.
    pub fn to_csv_line(&self) -> String {
        let mut line = self
            .cells
            .iter()
            .map(|cell| escape_csv(cell))
            .collect::<Vec<_>>()
            .join(",");
        line.push('\n');
        line
    }
}

fn escape_csv(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
