//! Demo command: summarises the sample packages shipped with the sensor unit.

use std::io::Write;

use anyhow::Result;

use wt_core::sample_packages;

use super::report::{BatchSummary, summarize_packages, write_reports};
use crate::OutputFormat;

pub fn run<W: Write, E: Write>(out: &mut W, diag: &mut E, format: OutputFormat) -> Result<BatchSummary> {
    let packages = sample_packages();
    write_reports(out, diag, &summarize_packages(&packages), format, true)
}
