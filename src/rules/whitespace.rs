use crate::finding::{Finding, FindingKind};

use super::{LineRule, findings_where};

/// Flags every line containing two or more consecutive spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceRule;

impl LineRule for WhitespaceRule {
    fn check(&self, file_name: &str, lines: &[&str]) -> Vec<Finding> {
        findings_where(file_name, lines, FindingKind::MultipleWhitespaces, |line| {
            line.contains("  ")
        })
    }
}
