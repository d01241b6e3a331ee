//! Types command listing supported workout codes.

use std::io::Write;

use anyhow::Result;

use wt_core::WorkoutType;

pub fn run<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "{:<5} {:<14} PARAMETERS", "CODE", "WORKOUT")?;
    for kind in WorkoutType::ALL {
        writeln!(
            writer,
            "{:<5} {:<14} {}",
            kind.code(),
            kind.display_name(),
            kind.parameters().join(", ")
        )?;
    }
    Ok(())
}
