use crate::utils::error::Result;
use std::io::Write;

const SEPARATOR_WIDTH: usize = 40;

/// Emits the explanatory banner and message for the example skill.
///
/// Stdout is the wire format here: callers consume the printed lines, not the
/// source. The writer is generic so tests can capture the exact bytes.
#[derive(Debug, Default)]
pub struct Runner;

impl Runner {
    pub fn new() -> Self {
        Self
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Example Skill Script")?;
        writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(out)?;
        writeln!(out, "This script demonstrates how skills can")?;
        writeln!(out, "include executable code.")?;
        writeln!(out)?;
        writeln!(out, "Benefits:")?;
        writeln!(out, "- Deterministic operations")?;
        writeln!(out, "- Efficient (code doesn't consume tokens)")?;
        writeln!(out, "- Reliable and testable")?;
        writeln!(out)?;
        writeln!(out, "Script executed successfully!")?;
        out.flush()?;

        Ok(())
    }
}
