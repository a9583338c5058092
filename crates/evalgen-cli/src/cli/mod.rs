//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use evalgen_core::domain::{Semester, SpreadsheetMode};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "evalgen",
    bin_name = "evalgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Course evaluation paperwork, validated and named",
    long_about = "evalgen checks course details, then produces the student comment \
                  sheet, the OIT scan cover sheet and a spreadsheet row for each course.",
    after_help = "EXAMPLES:\n\
        \x20 evalgen validate --first John --last Smith --subject cst --course 123 \\\n\
        \x20     --section wn123 --semester fall --year 2014\n\
        \x20 evalgen generate <course args> --comment-sheet --save-dir ./evals\n\
        \x20 evalgen completions bash > /usr/share/bash-completion/completions/evalgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check course details and artifact choices.
    #[command(
        visible_alias = "check",
        about = "Validate course details",
        after_help = "EXAMPLES:\n\
            \x20 evalgen validate <course args>\n\
            \x20 evalgen validate <course args> --oit-sheet\n\
            \x20 evalgen validate <course args> --spreadsheet new --spreadsheet-dir . --spreadsheet-name fall"
    )]
    Validate(ValidateArgs),

    /// Print the comment sheet file name for a course.
    #[command(about = "Print the canonical comment sheet name")]
    Name(NameArgs),

    /// Generate the requested documents.
    #[command(
        visible_alias = "gen",
        about = "Generate evaluation documents",
        after_help = "EXAMPLES:\n\
            \x20 evalgen generate <course args> --comment-sheet --save-dir ./evals\n\
            \x20 evalgen generate <course args> --oit-sheet --support-name 'Jane Doe' --support-ext 4021 --mailbox B12\n\
            \x20 evalgen generate <course args> --spreadsheet existing --spreadsheet-file classes.csv\n\
            \x20 evalgen generate <course args> --comment-sheet --save-dir . --dry-run"
    )]
    Generate(GenerateArgs),

    /// Initialise an evalgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 evalgen init          # default location\n\
            \x20 evalgen init --force  # replace an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 evalgen completions bash > ~/.local/share/bash-completion/completions/evalgen\n\
            \x20 evalgen completions zsh  > ~/.zfunc/_evalgen\n\
            \x20 evalgen completions fish > ~/.config/fish/completions/evalgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the evalgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 evalgen config get paths.questions_file\n\
            \x20 evalgen config list\n\
            \x20 evalgen config path"
    )]
    Config(ConfigCommands),
}

// ── shared argument groups ────────────────────────────────────────────────────

/// Course and instructor details.
///
/// Every text field is optional at parse time so that a missing value is
/// reported together with every other problem rather than one at a time.
#[derive(Debug, Clone, Args)]
pub struct CourseArgs {
    #[arg(long = "first", value_name = "NAME", help = "Instructor first name")]
    pub first_name: Option<String>,

    #[arg(long = "last", value_name = "NAME", help = "Instructor last name")]
    pub last_name: Option<String>,

    #[arg(long = "subject", value_name = "SUBJECT", help = "Course subject, e.g. CST")]
    pub subject: Option<String>,

    #[arg(long = "course", value_name = "NUMBER", help = "Course number, e.g. 123")]
    pub course_number: Option<String>,

    #[arg(long = "section", value_name = "SECTION", help = "Course section, e.g. WN123")]
    pub section: Option<String>,

    /// Semester; accepts fall, winter, spring, summer and short forms.
    #[arg(long = "semester", value_name = "SEMESTER", help = "Semester (fall, winter, spring, summer)")]
    pub semester: Semester,

    #[arg(long = "year", value_name = "YEAR", help = "Year the course runs")]
    pub year: Option<String>,

    #[arg(long = "support-name", value_name = "NAME", help = "Faculty support name (OIT sheet)")]
    pub support_name: Option<String>,

    #[arg(long = "support-ext", value_name = "EXT", help = "Faculty support phone extension (OIT sheet)")]
    pub support_extension: Option<String>,

    #[arg(long = "mailbox", value_name = "MAILBOX", help = "Mailbox for the scanned results (OIT sheet)")]
    pub mailbox: Option<String>,
}

/// Which artifacts to produce, and where.
#[derive(Debug, Clone, Default, Args)]
pub struct ArtifactArgs {
    #[arg(long = "comment-sheet", help = "Produce the student comment sheet")]
    pub comment_sheet: bool,

    #[arg(long = "save-dir", value_name = "DIR", help = "Directory for the comment sheet")]
    pub save_dir: Option<PathBuf>,

    #[arg(long = "oit-sheet", help = "Produce the OIT scan cover sheet")]
    pub oit_sheet: bool,

    /// `existing` appends to a spreadsheet, `new` creates one.
    #[arg(long = "spreadsheet", value_name = "MODE", help = "Update a spreadsheet (existing, new)")]
    pub spreadsheet: Option<SpreadsheetMode>,

    #[arg(long = "spreadsheet-file", value_name = "FILE", help = "Existing spreadsheet to append to")]
    pub spreadsheet_file: Option<PathBuf>,

    #[arg(long = "spreadsheet-dir", value_name = "DIR", help = "Directory for a new spreadsheet")]
    pub spreadsheet_dir: Option<PathBuf>,

    #[arg(long = "spreadsheet-name", value_name = "NAME", help = "File name for a new spreadsheet")]
    pub spreadsheet_name: Option<String>,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `evalgen validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub course: CourseArgs,

    #[command(flatten)]
    pub artifacts: ArtifactArgs,
}

// ── name ──────────────────────────────────────────────────────────────────────

/// Arguments for `evalgen name`.
#[derive(Debug, Args)]
pub struct NameArgs {
    #[command(flatten)]
    pub course: CourseArgs,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `evalgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub course: CourseArgs,

    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Evaluation questions file, overriding `paths.questions_file`.
    #[arg(long = "questions", value_name = "FILE", help = "Evaluation questions file")]
    pub questions: Option<PathBuf>,

    /// Skip the overwrite confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Overwrite an existing comment sheet without asking"
    )]
    pub yes: bool,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `evalgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `evalgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `evalgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.questions_file`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
