//! Generation Service - main application orchestrator.
//!
//! This service coordinates the whole generate action:
//! 1. Validate the record against the request
//! 2. Plan which artifacts land where
//! 3. Refuse to clobber an existing comment sheet unless told to
//! 4. Write sheets through the `SheetWriter` port and spreadsheet rows
//!    through the `Filesystem` port

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SheetWriter},
        services::ValidationService,
    },
    domain::{CourseRecord, GenerationRequest, Sheet, SpreadsheetMode, SpreadsheetRow, parse_questions},
    error::EvalResult,
};

/// Fixed locations the service reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPaths {
    /// Evaluation questions, one per line.
    pub questions_file: PathBuf,
    /// Where the OIT scan sheet is written. Overwritten every run.
    pub oit_sheet: PathBuf,
}

/// What one planned write produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    CommentSheet,
    OitScanSheet,
    NewSpreadsheet,
    SpreadsheetRow,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::CommentSheet => "comment sheet",
            Self::OitScanSheet => "OIT scan sheet",
            Self::NewSpreadsheet => "new spreadsheet",
            Self::SpreadsheetRow => "spreadsheet row",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

/// Artifacts a valid request will produce, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    pub file_name: String,
    pub artifacts: Vec<PlannedArtifact>,
}

impl GenerationPlan {
    pub fn path_of(&self, kind: ArtifactKind) -> Option<&Path> {
        self.artifacts
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.path.as_path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Replace a comment sheet that already exists.
    pub overwrite: bool,
    /// Printed as the OIT "Date of Request".
    pub request_date: NaiveDate,
}

/// What was actually written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub written: Vec<PlannedArtifact>,
}

/// Main generation service.
pub struct GenerationService {
    filesystem: Arc<dyn Filesystem>,
    writer: Box<dyn SheetWriter>,
    validator: ValidationService,
    paths: SheetPaths,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(filesystem: Arc<dyn Filesystem>, writer: Box<dyn SheetWriter>, paths: SheetPaths) -> Self {
        Self {
            validator: ValidationService::new(Arc::clone(&filesystem)),
            filesystem,
            writer,
            paths,
        }
    }

    pub fn validator(&self) -> &ValidationService {
        &self.validator
    }

    /// Validate and work out every target path without writing anything.
    #[instrument(skip_all, fields(course = %record))]
    pub fn plan(&self, record: &CourseRecord, request: &GenerationRequest) -> EvalResult<GenerationPlan> {
        if request.is_empty() {
            return Err(ApplicationError::NothingRequested.into());
        }

        let result = self.validator.validate(record, request);
        if !result.is_valid() {
            info!(problems = result.len(), "Request rejected");
            return Err(ApplicationError::ValidationFailed(result).into());
        }

        let file_name = record.canonical_file_name();
        let mut artifacts = Vec::new();

        if let Some(dir) = request.comment_sheet_dir.as_deref().filter(|_| request.want_comment_sheet) {
            artifacts.push(PlannedArtifact {
                kind: ArtifactKind::CommentSheet,
                path: self.writer.output_path(&dir.join(&file_name)),
            });
        }

        if request.want_oit_sheet {
            artifacts.push(PlannedArtifact {
                kind: ArtifactKind::OitScanSheet,
                path: self.writer.output_path(&self.paths.oit_sheet),
            });
        }

        if request.want_spreadsheet_update {
            let kind = match request.spreadsheet_mode {
                SpreadsheetMode::CreateNew => ArtifactKind::NewSpreadsheet,
                _ => ArtifactKind::SpreadsheetRow,
            };
            // Validation already rejected a request without a spreadsheet path.
            if let Some(path) = request.spreadsheet_path() {
                artifacts.push(PlannedArtifact { kind, path });
            }
        }

        debug!(artifacts = artifacts.len(), %file_name, "Plan ready");
        Ok(GenerationPlan { file_name, artifacts })
    }

    /// Generate every requested artifact.
    ///
    /// Every precondition is checked before the first write, so a failure
    /// leaves the filesystem untouched. Besides validation that means the
    /// comment sheet is not overwritten without `options.overwrite`, the
    /// questions file is readable and an existing spreadsheet is present.
    #[instrument(skip_all, fields(course = %record, overwrite = options.overwrite))]
    pub fn generate(
        &self,
        record: &CourseRecord,
        request: &GenerationRequest,
        options: GenerationOptions,
    ) -> EvalResult<GenerationReport> {
        let plan = self.plan(record, request)?;

        if let Some(path) = plan.path_of(ArtifactKind::CommentSheet) {
            if self.filesystem.exists(path) {
                if !options.overwrite {
                    return Err(ApplicationError::DocumentExists {
                        path: path.to_path_buf(),
                    }
                    .into());
                }
                warn!(path = %path.display(), "Overwriting existing comment sheet");
            }
        }

        let questions = match plan.path_of(ArtifactKind::CommentSheet) {
            Some(_) => self.load_questions()?,
            None => Vec::new(),
        };

        if let Some(path) = plan.path_of(ArtifactKind::SpreadsheetRow) {
            if !self.filesystem.exists(path) {
                return Err(ApplicationError::SpreadsheetNotFound {
                    path: path.to_path_buf(),
                }
                .into());
            }
        }

        let mut report = GenerationReport::default();
        for artifact in &plan.artifacts {
            let written = match artifact.kind {
                ArtifactKind::CommentSheet => {
                    let requested = request
                        .comment_sheet_dir
                        .as_deref()
                        .map(|dir| dir.join(&plan.file_name))
                        .unwrap_or_else(|| artifact.path.clone());
                    let sheet = Sheet::comment_sheet(record, &questions);
                    self.write_sheet(&sheet, &requested)?
                }
                ArtifactKind::OitScanSheet => {
                    let sheet = Sheet::oit_scan_sheet(record, options.request_date);
                    self.write_sheet(&sheet, &self.paths.oit_sheet)?
                }
                ArtifactKind::NewSpreadsheet => {
                    let mut content = SpreadsheetRow::header().to_csv_line();
                    content.push_str(&SpreadsheetRow::from_record(record).to_csv_line());
                    self.ensure_parent(&artifact.path)?;
                    self.filesystem.write_file(&artifact.path, &content)?;
                    artifact.path.clone()
                }
                ArtifactKind::SpreadsheetRow => {
                    let line = SpreadsheetRow::from_record(record).to_csv_line();
                    self.filesystem.append_file(&artifact.path, &line)?;
                    artifact.path.clone()
                }
            };

            info!(kind = %artifact.kind, path = %written.display(), "Written");
            report.written.push(PlannedArtifact {
                kind: artifact.kind,
                path: written,
            });
        }

        info!(count = report.written.len(), "Generation completed successfully");
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_sheet(&self, sheet: &Sheet, requested: &Path) -> EvalResult<PathBuf> {
        self.ensure_parent(requested)?;
        self.writer.write(sheet, requested)
    }

    fn load_questions(&self) -> EvalResult<Vec<String>> {
        let path = &self.paths.questions_file;
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::QuestionsNotFound { path: path.clone() }.into());
        }
        let questions = parse_questions(&self.filesystem.read_to_string(path)?);
        debug!(count = questions.len(), "Loaded evaluation questions");
        Ok(questions)
    }

    fn ensure_parent(&self, path: &Path) -> EvalResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.filesystem.create_dir_all(parent),
            _ => Ok(()),
        }
    }
}
