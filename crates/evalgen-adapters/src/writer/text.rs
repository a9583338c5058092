//! Plain-text sheet writer.
//!
//! Lays each table out as fixed-width columns, scaling the document cell
//! widths down to characters. The result is printable as-is and keeps the
//! same labels and ordering as the Word layout.

use std::path::{Path, PathBuf};

use evalgen_core::{
    application::{ApplicationError, ports::SheetWriter},
    domain::{Sheet, SheetRow},
    error::EvalResult,
};
use tracing::{debug, instrument};

/// Twentieths of a point per output character.
const WIDTH_PER_CHAR: u32 = 100;

pub const TEXT_EXTENSION: &str = "txt";

#[derive(Debug, Clone, Copy, Default)]
pub struct TextSheetWriter;

impl TextSheetWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render `sheet` to the text that [`SheetWriter::write`] saves.
    pub fn render(&self, sheet: &Sheet) -> String {
        let mut out = String::new();
        out.push_str(&sheet.title);
        out.push('\n');
        out.push_str(&"=".repeat(sheet.title.chars().count()));
        out.push('\n');

        for table in &sheet.tables {
            let width = table.rows.iter().map(row_width).max().unwrap_or(0);
            let rule = format!("+{}+\n", "-".repeat(width));

            out.push('\n');
            out.push_str(&rule);
            for row in &table.rows {
                out.push_str(&format!("|{:<width$}|\n", render_row(row)));
            }
            out.push_str(&rule);
        }
        out
    }
}

impl SheetWriter for TextSheetWriter {
    fn output_path(&self, requested: &Path) -> PathBuf {
        requested.with_extension(TEXT_EXTENSION)
    }

    #[instrument(skip_all, fields(kind = %sheet.kind))]
    fn write(&self, sheet: &Sheet, requested: &Path) -> EvalResult<PathBuf> {
        let path = self.output_path(requested);
        std::fs::write(&path, self.render(sheet)).map_err(|e| ApplicationError::WriteFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), rows = sheet.row_count(), "Sheet written");
        Ok(path)
    }
}

fn cell_chars(width: u32) -> usize {
    (width / WIDTH_PER_CHAR) as usize
}

fn row_width(row: &SheetRow) -> usize {
    row.cells
        .iter()
        .map(|c| cell_chars(c.width).max(c.text.chars().count() + 1))
        .sum::<usize>()
        + row.cells.len().saturating_sub(1)
}

fn render_row(row: &SheetRow) -> String {
    row.cells
        .iter()
        .map(|cell| {
            let width = cell_chars(cell.width).max(cell.text.chars().count() + 1);
            format!(" {:<w$}", cell.text, w = width - 1)
        })
        .collect::<Vec<_>>()
        .join("|")
}
