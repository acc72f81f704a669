use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use super::super::args::{OutputFormat, TranslationsCommand};
use super::super::exit_status::ExitStatus;
use super::super::report::{report_translations_json_to, report_translations_to};
use crate::core::{ExtractContext, LocalePattern};

pub fn translations(cmd: TranslationsCommand) -> Result<ExitStatus> {
    let ctx = ExtractContext::new(&cmd.common)?;
    if ctx.translations_path().is_none() {
        eprintln!(
            "{} no translations file configured (see --translations)",
            "warning:".bold().yellow()
        );
    }
    let extraction = ctx.extract()?;
    let store = &extraction.store;

    let resolved = store.get_translations(&cmd.locale);
    let patterns: Vec<&str> = store
        .matching_patterns(&cmd.locale)
        .map(LocalePattern::pattern)
        .collect();

    let mut out = io::stdout().lock();
    match cmd.format {
        OutputFormat::Text => {
            if resolved.is_empty() {
                writeln!(out, "No translations match locale '{}'", cmd.locale)?;
            } else {
                writeln!(
                    out,
                    "{} {} ({})",
                    "locale".bold(),
                    cmd.locale,
                    patterns.join(", ")
                )?;
                report_translations_to(&resolved, &mut out);
            }
        }
        OutputFormat::Json => {
            report_translations_json_to(&cmd.locale, patterns, &resolved, &mut out)?
        }
    }
    out.flush()?;

    Ok(ExitStatus::Success)
}
