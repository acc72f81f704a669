//! Command-line interface layer.

use anyhow::Result;
use clap::CommandFactory;
use tracing::Level;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{extract::extract, init::init, translations::translations};

/// Install the stderr diagnostics subscriber.
///
/// Warnings are always shown; `--verbose` adds per-file debug events.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_ansi(colored::control::ShouldColorize::from_env().should_colorize())
        .try_init();
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    match args.command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Translations(cmd)) => translations(cmd),
        Some(Command::Init) => init(),
        None => {
            Arguments::command().print_help().ok();
            Ok(ExitStatus::Success)
        }
    }
}
