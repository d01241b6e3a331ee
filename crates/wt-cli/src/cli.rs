//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::calc::CalcArgs;
use crate::commands::report::ReportArgs;

/// Workout tracker.
///
/// Summarises distance, mean speed and spent calories for running, race
/// walking and swimming sessions recorded by the sensor unit.
#[derive(Debug, Parser)]
#[command(name = "wt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarise a batch of sensor packages (JSON Lines).
    Report(ReportArgs),

    /// Summarise a single workout given on the command line.
    Calc(CalcArgs),

    /// Summarise the built-in sample packages.
    Demo {
        /// Output as JSON Lines.
        #[arg(long)]
        json: bool,
    },

    /// List supported workout codes and their parameters.
    Types,
}
