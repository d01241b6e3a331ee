//! CLI subcommand implementations.

pub mod calc;
pub mod demo;
pub mod report;
pub mod types;
