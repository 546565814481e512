use crate::finding::{Finding, FindingKind};

use super::LineRule;

/// The last line of a document must end with `\n`.
///
/// # Preconditions
/// `lines` must not be empty. The validator never runs this rule on a
/// zero-line document; if it is called with one anyway, debug builds assert
/// and release builds report nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingNewlineRule;

impl LineRule for TrailingNewlineRule {
    fn check(&self, file_name: &str, lines: &[&str]) -> Vec<Finding> {
        debug_assert!(!lines.is_empty(), "trailing newline rule needs at least one line");
        let Some(last) = lines.last() else {
            return Vec::new();
        };

        if last.ends_with('\n') {
            Vec::new()
        } else {
            vec![Finding::new(
                file_name,
                lines.len(),
                FindingKind::MissingTrailingNewline,
            )]
        }
    }
}
