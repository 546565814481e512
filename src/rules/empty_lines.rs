use crate::finding::{Finding, FindingKind};

use super::LineRule;

/// Flags every empty line after the first in a run of empty lines.
///
/// A line is empty when nothing but whitespace remains after trimming, so a
/// run of N empty lines yields N - 1 findings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLinesRule;

impl LineRule for EmptyLinesRule {
    fn check(&self, file_name: &str, lines: &[&str]) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut run = 0usize;

        for (i, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                run += 1;
            } else {
                run = 0;
            }

            if run >= 2 {
                findings.push(Finding::new(
                    file_name,
                    i + 1,
                    FindingKind::MultipleEmptyLines,
                ));
            }
        }

        findings
    }
}

#[cfg(test)]
#[path = "empty_lines_tests.rs"]
mod tests;
