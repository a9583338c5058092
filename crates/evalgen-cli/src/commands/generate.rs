//! Implementation of the `evalgen generate` command.
//!
//! Responsibility: turn CLI arguments into a record and request, call the
//! core generation service, and handle the overwrite confirmation.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use chrono::Local;
use tracing::{info, instrument};

use evalgen_adapters::{LocalFilesystem, TextSheetWriter};
use evalgen_core::{
    application::{
        ApplicationError, GenerationOptions, GenerationPlan, GenerationReport, GenerationService,
        SheetPaths,
    },
    error::EvalError,
};

use crate::{
    cli::GenerateArgs,
    commands::{course_record, generation_request},
    config::AppConfig,
    error::{CliContext, CliError, CliResult},
    output::OutputManager,
};

/// Execute the `evalgen generate` command.
///
/// Dispatch sequence:
/// 1. Build the record and request (config supplies missing locations)
/// 2. `--dry-run`: print the plan and stop
/// 3. Generate; if the comment sheet exists, confirm and retry with
///    overwrite unless `--yes`, `--quiet` or JSON output rule prompting out
/// 4. Report what was written
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let record = course_record(&args.course);
    let request = generation_request(&args.artifacts, &config);

    let paths = SheetPaths {
        questions_file: args
            .questions
            .clone()
            .unwrap_or_else(|| config.paths.questions_file.clone()),
        oit_sheet: config.paths.oit_sheet.clone(),
    };
    let service = GenerationService::new(
        Arc::new(LocalFilesystem::new()),
        Box::new(TextSheetWriter::new()),
        paths,
    );

    if args.dry_run {
        let plan = service.plan(&record, &request)?;
        return show_plan(&plan, &output);
    }

    let mut options = GenerationOptions {
        overwrite: args.yes,
        request_date: Local::now().date_naive(),
    };

    output.header(&format!("Generating documents for {record}"))?;

    let report = match service.generate(&record, &request, options) {
        Err(EvalError::Application(ApplicationError::DocumentExists { path }))
            if may_prompt(&args, &output) =>
        {
            if !confirm_overwrite(&path)? {
                return Err(CliError::Cancelled);
            }
            info!(path = %path.display(), "Overwrite confirmed");
            options.overwrite = true;
            service.generate(&record, &request, options)?
        }
        other => other?,
    };

    show_report(&report, &output)
}

fn may_prompt(args: &GenerateArgs, output: &OutputManager) -> bool {
    !args.yes && !output.is_quiet() && !output.is_json()
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &GenerationPlan, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(plan)?;
        return Ok(());
    }

    out.info("Dry run: nothing will be written")?;
    out.print(&format!("  Comment sheet name: {}", plan.file_name))?;
    for artifact in &plan.artifacts {
        out.print(&format!(
            "  {:<16} {}",
            format!("{}:", artifact.kind),
            artifact.path.display()
        ))?;
    }
    Ok(())
}

fn show_report(report: &GenerationReport, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(report)?;
        return Ok(());
    }

    for artifact in &report.written {
        out.success(&format!(
            "Wrote {}: {}",
            artifact.kind,
            artifact.path.display()
        ))?;
    }
    Ok(())
}

fn confirm_overwrite(path: &Path) -> CliResult<bool> {
    let prompt = format!("{} already exists. Overwrite it?", path.display());

    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;

        if io::stdin().is_terminal() {
            return dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .map_err(|e| CliError::Prompt {
                    message: e.to_string(),
                    source: Some(Box::new(e)),
                });
        }
    }

    confirm_from_stdin(&prompt)
}

/// Line-based fallback for non-terminal stdin. Anything but yes is no.
fn confirm_from_stdin(prompt: &str) -> CliResult<bool> {
    print!("{prompt} [y/N] ");
    io::stdout()
        .flush()
        .cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .cli_context(|| "failed to read confirmation input")?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
