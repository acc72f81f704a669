//! Report formatting and printing utilities.
//!
//! Catalogs and resolved translations are printed either as cargo-style text or
//! as JSON. Kept separate from the engine so glean can be used as a library.

use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;
use indexmap::IndexMap;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::core::{MessageEntry, MessageStore, ParseFailure};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the catalog as text: each message followed by its provenance.
///
/// ```text
/// Welcome
///   --> content/index.yaml
///   = note: Page heading
/// ```
pub fn report_catalog_to<W: Write>(store: &MessageStore, writer: &mut W) {
    for (message, entry) in store.entries() {
        let _ = writeln!(writer, "{}", message.bold());
        for location in &entry.locations {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), location);
        }
        for comment in &entry.comments {
            let _ = writeln!(writer, "  {} {}", "= note:".cyan(), comment);
        }
    }
}

#[derive(Serialize)]
struct CatalogJson<'a> {
    messages: IndexMap<&'a str, &'a MessageEntry>,
}

/// Print the catalog as pretty JSON, messages in discovery order.
pub fn report_catalog_json_to<W: Write>(store: &MessageStore, writer: &mut W) -> Result<()> {
    let catalog = CatalogJson {
        messages: store.entries().collect(),
    };
    let json = serde_json::to_string_pretty(&catalog).context("Failed to serialize catalog")?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

/// Print resolved translations as an aligned two-column table.
pub fn report_translations_to<W: Write>(
    translations: &IndexMap<String, String>,
    writer: &mut W,
) {
    let width = translations
        .keys()
        .map(|message| message.width())
        .max()
        .unwrap_or(0);

    for (message, translated) in translations {
        let padding = " ".repeat(width - message.width());
        let _ = writeln!(writer, "{}{} {} {}", message, padding, "=>".dimmed(), translated);
    }
}

#[derive(Serialize)]
struct TranslationsJson<'a> {
    locale: &'a str,
    patterns: Vec<&'a str>,
    translations: &'a IndexMap<String, String>,
}

/// Print resolved translations as pretty JSON.
pub fn report_translations_json_to<W: Write>(
    locale: &str,
    patterns: Vec<&str>,
    translations: &IndexMap<String, String>,
    writer: &mut W,
) -> Result<()> {
    let report = TranslationsJson {
        locale,
        patterns,
        translations,
    };
    let json =
        serde_json::to_string_pretty(&report).context("Failed to serialize translations")?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

/// Print one warning per content file that failed to parse.
pub fn print_parse_failures_to<W: Write>(failures: &[ParseFailure], writer: &mut W) {
    for failure in failures {
        let _ = writeln!(
            writer,
            "{} {} could not be parsed: {}",
            "warning:".bold().yellow(),
            failure.file_path,
            failure.error
        );
    }
}

/// Print the extraction summary line.
pub fn print_extract_summary_to<W: Write>(
    message_count: usize,
    file_count: usize,
    failure_count: usize,
    writer: &mut W,
) {
    let counts = format!(
        "{} {} from {} {}",
        message_count,
        if message_count == 1 { "message" } else { "messages" },
        file_count,
        if file_count == 1 { "file" } else { "files" }
    );
    let msg = if failure_count == 0 {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Extracted {}", counts).green()
        )
    } else {
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Extracted {}, {} {} could not be parsed",
                counts,
                failure_count,
                if failure_count == 1 { "file" } else { "files" }
            )
            .red()
        )
    };
    let _ = writeln!(writer, "{}", msg);
}
