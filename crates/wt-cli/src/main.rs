use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wt_cli::commands::{calc, demo, report, types};
use wt_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout carries only reports
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    match &cli.command {
        Some(Commands::Report(args)) => {
            let summary = report::run(args, &config)?;
            tracing::debug!(
                reported = summary.reported,
                skipped = summary.skipped,
                "batch complete"
            );
        }
        Some(Commands::Calc(args)) => {
            calc::run(&mut io::stdout().lock(), args, config.output_format(args.json))?;
        }
        Some(Commands::Demo { json }) => {
            demo::run(
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
                config.output_format(*json),
            )?;
        }
        Some(Commands::Types) => {
            types::run(&mut io::stdout().lock())?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
