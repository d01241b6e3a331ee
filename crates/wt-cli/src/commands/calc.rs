//! Calc command for summarising a single workout from the command line.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use wt_core::read_package;

use crate::OutputFormat;

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Workout code (SWM, RUN or WLK).
    pub code: String,

    /// Readings in the order listed by `wt types`.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &CalcArgs, format: OutputFormat) -> Result<()> {
    let training = read_package(&args.code, &args.values)
        .with_context(|| format!("cannot summarise {} workout", args.code))?;
    let report = training.summarize();

    match format {
        OutputFormat::Text => writeln!(writer, "{report}")?,
        OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?,
    }
    Ok(())
}
