//! `evalgen validate`: report every problem with the course details.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, instrument};

use evalgen_adapters::LocalFilesystem;
use evalgen_core::{application::ApplicationError, application::ValidationService};

use crate::{
    cli::ValidateArgs,
    commands::{course_record, generation_request},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Validate the record and request; problems become a user error (exit 2).
#[instrument(skip_all)]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let record = course_record(&args.course);
    let request = generation_request(&args.artifacts, &config);

    let service = ValidationService::new(Arc::new(LocalFilesystem::new()));
    let result = service.validate(&record, &request);
    info!(course = %record, problems = result.len(), "Validated");

    if output.is_json() {
        output.json(&json!({
            "valid": result.is_valid(),
            "problems": &result,
        }))?;
    }

    if !result.is_valid() {
        return Err(CliError::Core(ApplicationError::ValidationFailed(result).into()));
    }

    output.success(&format!("{record} is valid"))?;
    if request.want_comment_sheet {
        output.print(&format!("  Comment sheet: {}", record.canonical_file_name()))?;
    }
    Ok(())
}
