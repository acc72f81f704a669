use std::io::{self, Write};

use anyhow::Result;

use super::super::args::{ExtractCommand, OutputFormat};
use super::super::exit_status::ExitStatus;
use super::super::report::{
    print_extract_summary_to, print_parse_failures_to, report_catalog_json_to, report_catalog_to,
};
use crate::core::ExtractContext;

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let ctx = ExtractContext::new(&cmd.common)?;
    let extraction = ctx.extract()?;

    print_parse_failures_to(&extraction.parse_failures, &mut io::stderr().lock());

    let mut out = io::stdout().lock();
    match cmd.format {
        OutputFormat::Text => {
            report_catalog_to(&extraction.store, &mut out);
            print_extract_summary_to(
                extraction.store.len(),
                extraction.files_extracted,
                extraction.parse_failures.len(),
                &mut out,
            );
        }
        OutputFormat::Json => report_catalog_json_to(&extraction.store, &mut out)?,
    }
    out.flush()?;

    if extraction.parse_failures.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
