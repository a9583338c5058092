//! `evalgen`: checks course details and produces the paperwork for a
//! course evaluation (comment sheet, OIT scan cover sheet, spreadsheet row).
//!
//! Exit codes:
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! |  0   | Success                                        |
//! |  1   | Internal or I/O failure                        |
//! |  2   | Bad input, failed validation, or cancelled     |
//! |  3   | A required file (the questions) is missing     |
//! |  4   | Configuration could not be loaded or written   |

use std::io::{self, IsTerminal as _};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult, Style},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also land here, on stdout.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("evalgen: {e}");
        return ExitCode::FAILURE;
    }
    debug!(command = ?cli.command, "Parsed arguments");

    let verbose = cli.global.verbose > 0;
    let style = if cli.global.no_color || !io::stderr().is_terminal() {
        Style::Plain
    } else {
        Style::Colored
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.log();
            eprint!("{}", err.render(style, verbose));
            ExitCode::from(err.exit_code())
        }
    }
}

#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    // `init` must work while the config file is missing or broken.
    let config = match cli.command {
        Commands::Init(_) => AppConfig::default(),
        _ => AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
            message: format!("{e:#}"),
            source: None,
        })?,
    };
    let output = OutputManager::new(&cli.global, &config);

    match cli.command {
        Commands::Validate(args) => commands::validate::execute(args, config, output),
        Commands::Name(args) => commands::name::execute(args, output),
        Commands::Generate(args) => commands::generate::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, &cli.global, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(args) => {
            let active = cli.global.config.clone().unwrap_or_else(AppConfig::config_path);
            commands::config::execute(args, config, &active, output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn version_comes_from_manifest() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }
}
