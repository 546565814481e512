use crate::finding::{Finding, FindingKind};

use super::LineRule;

/// Lines must end with a bare `\n`.
///
/// Only the first offending line is reported; a file with the wrong
/// convention usually has it on every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEndingRule;

fn is_lf(line: &str) -> bool {
    line.ends_with('\n') && !line.ends_with("\r\n")
}

impl LineRule for LineEndingRule {
    fn check(&self, file_name: &str, lines: &[&str]) -> Vec<Finding> {
        lines
            .iter()
            .position(|line| !is_lf(line))
            .map(|i| Finding::new(file_name, i + 1, FindingKind::LineEndingNotLf))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
#[path = "line_ending_tests.rs"]
mod tests;
