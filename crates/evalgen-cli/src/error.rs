//! CLI errors and how they are shown to the operator.
//!
//! Every failure leaves the binary as a [`CliError`]. Its [`ExitStatus`]
//! decides the process exit code; [`CliError::render`] produces the
//! stderr report, listing every validation problem when validation failed.

use std::error::Error;
use std::io;

use owo_colors::OwoColorize;
use thiserror::Error;

use evalgen_core::{
    domain::ValidationResult,
    error::{ErrorCategory, EvalError},
};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The overwrite confirmation could not be read from the terminal.
    #[error("Could not read confirmation: {message}")]
    Prompt {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// Loading, writing or querying the config file failed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// Failed validation arrives here too.
    #[error("{0}")]
    Core(#[from] EvalError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },

    /// The operator answered no to the overwrite question.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

/// How a failure ends the process. The discriminant is the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Internal = 1,
    /// Bad input, including fields that failed validation.
    Usage = 2,
    NotFound = 3,
    Config = 4,
}

/// Whether [`CliError::render`] may emit ANSI colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Colored,
    Plain,
}

impl CliError {
    pub fn status(&self) -> ExitStatus {
        match self {
            Self::Prompt { .. } | Self::Cancelled => ExitStatus::Usage,
            Self::ConfigError { .. } => ExitStatus::Config,
            Self::IoError { .. } => ExitStatus::Internal,
            Self::Core(core) => match core.category() {
                ErrorCategory::Validation => ExitStatus::Usage,
                ErrorCategory::NotFound => ExitStatus::NotFound,
                ErrorCategory::Configuration => ExitStatus::Config,
                ErrorCategory::Internal => ExitStatus::Internal,
            },
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.status() as u8
    }

    fn problems(&self) -> Option<&ValidationResult> {
        match self {
            Self::Core(core) => core.validation_problems(),
            _ => None,
        }
    }

    /// Things the operator can do next. Validation problems are listed by
    /// [`Self::render`] itself, so they are not repeated here.
    pub fn hints(&self) -> Vec<String> {
        if self.problems().is_some() {
            return vec!["Correct the fields above and run the command again".into()];
        }

        match self {
            Self::Prompt { .. } => vec![
                "Pass --yes to overwrite without asking".into(),
                "Or run from an interactive terminal".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Run 'evalgen config path' to see which file is read".into(),
                "Run 'evalgen init --force' to restore the defaults".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check that the location exists and is writable".into()],
            Self::Cancelled => vec!["Nothing was overwritten".into()],
        }
    }

    fn headline(&self) -> String {
        match self.problems() {
            Some(problems) => format!("The following fields have errors ({}):", problems.len()),
            None => self.to_string(),
        }
    }

    /// The full stderr report.
    pub fn render(&self, style: Style, verbose: bool) -> String {
        let colored = style == Style::Colored;
        let mut out = String::from("\n");

        let headline = self.headline();
        if colored {
            out.push_str(&format!("{} {}\n", "✗".red().bold(), headline.red().bold()));
        } else {
            out.push_str(&format!("Error: {headline}\n"));
        }

        for problem in self.problems().into_iter().flatten() {
            out.push_str(&format!("  • {problem}\n"));
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("  caused by: {err}");
                if colored {
                    out.push_str(&format!("{}\n", line.dimmed()));
                } else {
                    out.push_str(&line);
                    out.push('\n');
                }
                cause = err.source();
            }
        }

        let hints = self.hints();
        if !hints.is_empty() {
            if colored {
                out.push_str(&format!("\n{}\n", "Hint:".yellow().bold()));
            } else {
                out.push_str("\nHint:\n");
            }
            for hint in &hints {
                out.push_str(&format!("  {hint}\n"));
            }
        }

        if !verbose && self.source().is_some() {
            let more = "Run again with -v to see the underlying cause.";
            if colored {
                out.push_str(&format!("\n{}\n", more.dimmed()));
            } else {
                out.push_str(&format!("\n{more}\n"));
            }
        }

        out
    }

    /// Record the failure in the log before it is reported.
    pub fn log(&self) {
        match self.status() {
            ExitStatus::Usage | ExitStatus::NotFound => {
                tracing::warn!(code = self.exit_code(), "{}", self)
            }
            ExitStatus::Config | ExitStatus::Internal => {
                tracing::error!(code = self.exit_code(), "{}", self)
            }
        }
        if let Some(cause) = self.source() {
            tracing::debug!("caused by: {cause}");
        }
    }
}

/// Attach a message to foreign errors at the call site.
pub trait CliContext<T> {
    fn cli_context<S: Into<String>>(self, message: impl FnOnce() -> S) -> CliResult<T>;
}

impl<T> CliContext<T> for Result<T, io::Error> {
    fn cli_context<S: Into<String>>(self, message: impl FnOnce() -> S) -> CliResult<T> {
        self.map_err(|source| CliError::IoError {
            message: message().into(),
            source,
        })
    }
}

impl<T> CliContext<T> for Result<T, toml::ser::Error> {
    fn cli_context<S: Into<String>>(self, message: impl FnOnce() -> S) -> CliResult<T> {
        self.map_err(|e| CliError::ConfigError {
            message: message().into(),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use evalgen_core::{
        application::ApplicationError,
        domain::{CourseForm, CourseRecord, GenerationRequest, Semester, validate},
    };

    fn invalid_course() -> CliError {
        let record = CourseRecord::from_form(
            CourseForm::new(Semester::Fall)
                .instructor("John", "")
                .course("cst", "1a3", "wn123")
                .year("2014"),
        );
        let result = validate(&record, &GenerationRequest::default(), |_| false);
        CliError::Core(ApplicationError::ValidationFailed(result).into())
    }

    fn core(err: ApplicationError) -> CliError {
        CliError::Core(err.into())
    }

    #[test]
    fn exit_codes_follow_status() {
        assert_eq!(invalid_course().exit_code(), 2);
        assert_eq!(CliError::Cancelled.exit_code(), 2);
        assert_eq!(
            core(ApplicationError::QuestionsNotFound {
                path: PathBuf::from("q.txt")
            })
            .exit_code(),
            3
        );
        assert_eq!(
            CliError::ConfigError {
                message: "bad".into(),
                source: None
            }
            .exit_code(),
            4
        );
        assert_eq!(CliError::from(io::Error::other("disk")).exit_code(), 1);
    }

    #[test]
    fn validation_report_lists_each_problem_once() {
        let report = invalid_course().render(Style::Plain, false);
        assert!(report.contains("Error: The following fields have errors (2):"));
        assert!(report.contains("  • Instructor last name field blank\n"));
        assert!(report.contains("  • Course number field contains letters\n"));
        assert_eq!(report.matches("Instructor last name").count(), 1);
        assert!(report.contains("Correct the fields above"));
    }

    #[test]
    fn document_exists_hints_at_yes() {
        let err = core(ApplicationError::DocumentExists {
            path: PathBuf::from("/tmp/x.docx"),
        });
        assert!(err.hints().iter().any(|h| h.contains("--yes")));
    }

    #[test]
    fn verbose_report_shows_causes() {
        let result: Result<(), io::Error> = Err(io::Error::other("disk full"));
        let err = result.cli_context(|| "writing config").unwrap_err();

        let quiet = err.render(Style::Plain, false);
        assert!(quiet.contains("Error: I/O error: writing config"));
        assert!(!quiet.contains("disk full"));
        assert!(quiet.contains("-v"));

        let verbose = err.render(Style::Plain, true);
        assert!(verbose.contains("caused by: disk full"));
        assert!(!verbose.contains("Run again with -v"));
    }

    #[test]
    fn plain_report_has_no_ansi() {
        assert!(!invalid_course().render(Style::Plain, true).contains('\u{1b}'));
    }
}
