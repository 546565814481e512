mod text;

pub use text::TextFormatter;

use std::io::Write;

use crate::error::Result;
use crate::finding::Finding;

/// Trait for formatting findings into a report.
pub trait OutputFormatter {
    /// Format the findings into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, findings: &[Finding]) -> Result<String>;
}

/// Format `findings` and write the report to `writer`.
///
/// # Errors
/// Returns an error if formatting or writing fails.
pub fn write_report<F, W>(formatter: &F, findings: &[Finding], writer: &mut W) -> Result<()>
where
    F: OutputFormatter,
    W: Write,
{
    let report = formatter.format(findings)?;
    writer.write_all(report.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
