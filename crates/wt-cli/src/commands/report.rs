//! Report command for summarising a batch of sensor packages.
//!
//! Packages are read as JSON Lines, one per line, in either form accepted by
//! [`WorkoutPackage`]. Packages that cannot be dispatched are reported on the
//! diagnostic stream and skipped unless `fail_fast` is set.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use rayon::prelude::*;

use wt_core::{DispatchError, ReportData, WorkoutPackage};

use crate::{Config, OutputFormat};

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// JSON Lines file with sensor packages (`-` for stdin).
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Output as JSON Lines.
    #[arg(long)]
    pub json: bool,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Packages written as reports.
    pub reported: usize,
    /// Packages skipped because they could not be dispatched.
    pub skipped: usize,
}

pub fn run(args: &ReportArgs, config: &Config) -> Result<BatchSummary> {
    let packages = if args.input.as_os_str() == "-" {
        parse_packages(io::stdin().lock())?
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("failed to open {}", args.input.display()))?;
        parse_packages(BufReader::new(file))
            .with_context(|| format!("failed to read {}", args.input.display()))?
    };
    tracing::debug!(count = packages.len(), "parsed workout packages");

    let stdout = io::stdout();
    let stderr = io::stderr();
    write_reports(
        &mut stdout.lock(),
        &mut stderr.lock(),
        &summarize_packages(&packages),
        config.output_format(args.json),
        config.fail_fast,
    )
}

/// Parses JSON Lines sensor packages, skipping blank lines.
pub fn parse_packages<R: BufRead>(reader: R) -> Result<Vec<WorkoutPackage>> {
    let mut packages = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let package: WorkoutPackage = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid JSON on line {}", idx + 1))?;
        packages.push(package);
    }
    Ok(packages)
}

/// Dispatches and summarises every package, preserving input order.
pub fn summarize_packages(packages: &[WorkoutPackage]) -> Vec<Result<ReportData, DispatchError>> {
    packages
        .par_iter()
        .map(|package| package.read().map(|training| training.summarize()))
        .collect()
}

/// Writes one line per report to `out` and one diagnostic per failure to `diag`.
pub fn write_reports<W: Write, E: Write>(
    out: &mut W,
    diag: &mut E,
    outcomes: &[Result<ReportData, DispatchError>],
    format: OutputFormat,
    fail_fast: bool,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (idx, outcome) in outcomes.iter().enumerate() {
        let record = idx + 1;
        match outcome {
            Ok(report) => {
                match format {
                    OutputFormat::Text => writeln!(out, "{report}")?,
                    OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(report)?)?,
                }
                summary.reported += 1;
            }
            Err(err) if fail_fast => bail!("record {record}: {err}"),
            Err(err) => {
                tracing::warn!(record, error = %err, "skipping workout package");
                writeln!(diag, "record {record}: {err}")?;
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    const BATCH: &str = r#"{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}

["RUN", [15000, 1, 75]]
{"type": "XYZ", "data": [1, 2, 3]}
{"workout_type": "RUN", "data": [15000, 1]}
{"workout_type": "WLK", "data": [9000, 1, 75, 180]}
"#;

    fn run_batch(format: OutputFormat, fail_fast: bool) -> (Result<BatchSummary>, String, String) {
        let packages = parse_packages(BATCH.as_bytes()).unwrap();
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let result = write_reports(
            &mut out,
            &mut diag,
            &summarize_packages(&packages),
            format,
            fail_fast,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
        )
    }

    #[test]
    fn parse_skips_blank_lines() {
        let packages = parse_packages(BATCH.as_bytes()).unwrap();
        assert_eq!(packages.len(), 5);
        assert_eq!(packages[1], WorkoutPackage::new("RUN", [15_000.0, 1.0, 75.0]));
    }

    #[test]
    fn parse_reports_malformed_line() {
        let input = "[\"RUN\", [15000, 1, 75]]\nnot json\n";
        let err = parse_packages(input.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "invalid JSON on line 2");
    }

    #[test]
    fn summaries_keep_input_order() {
        let packages = parse_packages(BATCH.as_bytes()).unwrap();
        let outcomes = summarize_packages(&packages);
        let names: Vec<_> = outcomes
            .iter()
            .map(|o| o.as_ref().map_or("-", |r| r.workout_name))
            .collect();
        assert_eq!(names, ["Swimming", "Running", "-", "-", "SportsWalking"]);
    }

    #[test]
    fn batch_skips_invalid_records() {
        let (result, out, diag) = run_batch(OutputFormat::Text, false);
        assert_eq!(
            result.unwrap(),
            BatchSummary {
                reported: 3,
                skipped: 2,
            }
        );
        assert_snapshot!(out, @r"
        Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000.
        Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750.
        Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 157.500.
        ");
        assert_snapshot!(diag, @r#"
        record 3: unknown workout type "XYZ": please specify a valid workout type (SWM, RUN, WLK)
        record 4: RUN expects 3 values (action, duration, weight), got 2
        "#);
    }

    #[test]
    fn batch_fail_fast_stops_at_first_error() {
        let (result, out, diag) = run_batch(OutputFormat::Text, true);
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"record 3: unknown workout type "XYZ": please specify a valid workout type (SWM, RUN, WLK)"#
        );
        assert_eq!(out.lines().count(), 2);
        assert!(diag.is_empty());
    }

    #[test]
    fn batch_writes_json_lines() {
        let (result, out, _diag) = run_batch(OutputFormat::Json, false);
        assert_eq!(result.unwrap().reported, 3);

        let first: serde_json::Value = serde_json::from_str(out.lines().next().unwrap()).unwrap();
        assert_eq!(first["workout_name"], "Swimming");
        assert_eq!(first["mean_speed_kmh"], 1.0);
        let calories = first["calories_kcal"].as_f64().unwrap();
        assert!((calories - 336.0).abs() < 1e-9);
    }
}
