//! `GenerationRequest`: which artifacts to produce and where.
//!
//! A request is built fresh for every generate action and dropped right
//! after. "Nothing chosen yet" is an explicit `None` rather than a sentinel
//! string; validation reports it as a problem.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::SpreadsheetMode;

/// Extension every spreadsheet written or appended to must carry.
pub const SPREADSHEET_EXTENSION: &str = "csv";

/// The artifacts requested for one course, plus their chosen locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub want_comment_sheet: bool,
    pub want_oit_sheet: bool,
    pub want_spreadsheet_update: bool,
    pub spreadsheet_mode: SpreadsheetMode,
    /// Directory the comment sheet is saved into.
    pub comment_sheet_dir: Option<PathBuf>,
    /// Directory a new spreadsheet is created in.
    pub spreadsheet_dir: Option<PathBuf>,
    /// Base name of a new spreadsheet, as typed.
    pub spreadsheet_file_name: String,
    /// Previously generated spreadsheet to append to.
    pub existing_spreadsheet: Option<PathBuf>,
}

impl GenerationRequest {
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// `true` if no artifact was requested at all.
    pub fn is_empty(&self) -> bool {
        !(self.want_comment_sheet || self.want_oit_sheet || self.want_spreadsheet_update)
    }

    /// Full path of the spreadsheet a `CreateNew` request would write.
    ///
    /// `None` when no directory was chosen. The `.csv` extension is appended
    /// unless the typed name already ends with it.
    pub fn new_spreadsheet_path(&self) -> Option<PathBuf> {
        let dir = self.spreadsheet_dir.as_deref()?;
        Some(dir.join(spreadsheet_file_name(&self.spreadsheet_file_name)))
    }

    /// The spreadsheet this request targets, whichever mode is selected.
    pub fn spreadsheet_path(&self) -> Option<PathBuf> {
        match self.spreadsheet_mode {
            SpreadsheetMode::CreateNew => self.new_spreadsheet_path(),
            SpreadsheetMode::UseExisting => self.existing_spreadsheet.clone(),
            SpreadsheetMode::None => None,
        }
    }
}

/// File name for a new spreadsheet typed as `name`.
pub fn spreadsheet_file_name(name: &str) -> String {
    if has_spreadsheet_extension(Path::new(name)) {
        name.to_string()
    } else {
        format!("{name}.{SPREADSHEET_EXTENSION}")
    }
}

/// Whether `path` names a tabular-data file this tool can append to.
pub fn has_spreadsheet_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SPREADSHEET_EXTENSION))
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`GenerationRequest`].
///
/// Setting a location also turns on the matching artifact, so the common
/// path reads naturally; the `want_*` flags can still be set without a
/// location to model "checked but nothing picked".
#[derive(Debug, Default)]
pub struct GenerationRequestBuilder {
    request: GenerationRequest,
}

impl GenerationRequestBuilder {
    /// Request a comment sheet, optionally with its save directory.
    pub fn comment_sheet(mut self, dir: Option<impl Into<PathBuf>>) -> Self {
        self.request.want_comment_sheet = true;
        self.request.comment_sheet_dir = dir.map(Into::into);
        self
    }

    /// Request an OIT scan sheet.
    pub fn oit_sheet(mut self) -> Self {
        self.request.want_oit_sheet = true;
        self
    }

    /// Request a spreadsheet update with no mode chosen yet.
    pub fn spreadsheet(mut self) -> Self {
        self.request.want_spreadsheet_update = true;
        self
    }

    /// Request a new spreadsheet named `name` inside `dir`.
    pub fn new_spreadsheet(
        mut self,
        dir: Option<impl Into<PathBuf>>,
        name: impl Into<String>,
    ) -> Self {
        self.request.want_spreadsheet_update = true;
        self.request.spreadsheet_mode = SpreadsheetMode::CreateNew;
        self.request.spreadsheet_dir = dir.map(Into::into);
        self.request.spreadsheet_file_name = name.into();
        self
    }

    /// Request an append to a previously generated spreadsheet.
    pub fn existing_spreadsheet(mut self, file: Option<impl Into<PathBuf>>) -> Self {
        self.request.want_spreadsheet_update = true;
        self.request.spreadsheet_mode = SpreadsheetMode::UseExisting;
        self.request.existing_spreadsheet = file.map(Into::into);
        self
    }

    pub fn build(self) -> GenerationRequest {
        self.request
    }
}
