use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use super::super::report::{FAILURE_MARK, SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};

/// Write a default `.gleanrc.json` into the current directory.
///
/// An existing config is left untouched and reported as a failure.
pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        eprintln!(
            "{} {} already exists, leaving it unchanged",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    let defaults = Config::default();
    println!("{} Created {}", SUCCESS_MARK.green(), CONFIG_FILE_NAME.bold());
    println!("  {} {}", "contentRoot:".cyan(), defaults.content_root);
    println!("  {} {}", "includes:".cyan(), defaults.includes.join(", "));

    Ok(ExitStatus::Success)
}
