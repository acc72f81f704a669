//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Walk the content corpus and print the message catalog
//! - `translations`: Print the overrides resolved for one locale
//! - `init`: Initialize glean configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Translations(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root where the config file lookup starts
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Content directory to extract from (overrides config file)
    #[arg(long)]
    pub content_root: Option<PathBuf>,

    /// Locale override file, JSON or YAML (overrides config file)
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct TranslationsCommand {
    /// Locale identifier matched against the registered patterns (e.g. fr_CA)
    pub locale: String,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract tagged messages from content files
    Extract(ExtractCommand),
    /// Show the translation overrides that apply to a locale
    Translations(TranslationsCommand),
    /// Initialize a new .gleanrc.json configuration file
    Init,
}
