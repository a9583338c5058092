//! `evalgen name`: print the canonical comment sheet name.

use serde_json::json;

use evalgen_core::{
    application::ApplicationError,
    domain::{GenerationRequest, canonical_file_name, validate},
};

use crate::{
    cli::NameArgs,
    commands::course_record,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// The name is only meaningful for a valid record, so course fields are
/// checked first.
pub fn execute(args: NameArgs, output: OutputManager) -> CliResult<()> {
    let record = course_record(&args.course);

    // A course-only request never probes the filesystem.
    let result = validate(&record, &GenerationRequest::default(), |_| false);
    if !result.is_valid() {
        return Err(CliError::Core(ApplicationError::ValidationFailed(result).into()));
    }

    let name = canonical_file_name(&record);
    if output.is_json() {
        output.json(&json!({ "file_name": name }))?;
    } else {
        output.data(&name)?;
    }
    Ok(())
}
