//! Diagnostics go to stderr through `tracing`.
//!
//! Only the binary installs a subscriber. The core and adapter crates just
//! emit events, filtered here by target. Without flags only warnings show;
//! each `-v` lowers the threshold one step, `--quiet` keeps errors only,
//! and a set `RUST_LOG` replaces the whole filter.

use std::io::{self, IsTerminal as _};

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::{GlobalArgs, OutputFormat};

/// Targets that share the verbosity chosen on the command line.
const TARGETS: [&str; 3] = ["evalgen", "evalgen_core", "evalgen_adapters"];

/// Install the global subscriber. Call once, first thing after parsing.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(threshold(args))));

    // Scripts reading JSON from stdout often capture stderr as well.
    let ansi = !args.no_color
        && args.output_format != OutputFormat::Json
        && io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

fn threshold(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
