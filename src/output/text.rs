use std::fmt::Write;

use crate::error::Result;
use crate::finding::Finding;

use super::OutputFormatter;

/// One `<file> <line> <message>` line per finding, in the given order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, findings: &[Finding]) -> Result<String> {
        let mut output = String::new();
        for finding in findings {
            writeln!(output, "{finding}").ok();
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
