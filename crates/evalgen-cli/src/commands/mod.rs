//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core types, call the core
//! services and report results. No business logic lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod name;
pub mod validate;

use evalgen_core::domain::{CourseForm, CourseRecord, GenerationRequest, SpreadsheetMode};

use crate::{
    cli::{ArtifactArgs, CourseArgs},
    config::AppConfig,
};

/// Normalised record from the course flags. Missing text is blank.
pub fn course_record(args: &CourseArgs) -> CourseRecord {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    CourseRecord::from_form(
        CourseForm::new(args.semester)
            .instructor(text(&args.first_name), text(&args.last_name))
            .course(
                text(&args.subject),
                text(&args.course_number),
                text(&args.section),
            )
            .year(text(&args.year))
            .support(
                text(&args.support_name),
                text(&args.support_extension),
                text(&args.mailbox),
            ),
    )
}

/// The request the artifact flags describe, with config fallbacks for
/// locations left off the command line.
pub fn generation_request(args: &ArtifactArgs, config: &AppConfig) -> GenerationRequest {
    let mut request = GenerationRequest::default();

    if args.comment_sheet {
        request.want_comment_sheet = true;
        request.comment_sheet_dir = args
            .save_dir
            .clone()
            .or_else(|| config.defaults.save_dir.clone());
    }

    request.want_oit_sheet = args.oit_sheet;

    if let Some(mode) = args.spreadsheet {
        request.want_spreadsheet_update = true;
        request.spreadsheet_mode = mode;
        match mode {
            SpreadsheetMode::CreateNew => {
                request.spreadsheet_dir = args.spreadsheet_dir.clone();
                request.spreadsheet_file_name = args.spreadsheet_name.clone().unwrap_or_default();
            }
            SpreadsheetMode::UseExisting => {
                request.existing_spreadsheet = args
                    .spreadsheet_file
                    .clone()
                    .or_else(|| config.defaults.spreadsheet_file.clone());
            }
            SpreadsheetMode::None => {}
        }
    }

    request
}
