use regex::Regex;

use crate::finding::{Finding, FindingKind};

use super::{LineRule, findings_where};

const FULL_WIDTH_SPACE: &str = "\u{3000}";
const FULL_WIDTH_PAREN: &str = "[（）]";
const FULL_WIDTH_ALPHABET: &str = "[Ａ-Ｚａ-ｚ]";
const FULL_WIDTH_NUMERIC: &str = "[０-９]";
// Fixed set; other full-width punctuation is deliberately allowed.
const FULL_WIDTH_SYMBOL: &str = r"[！＂＃＄％＆＇＊＋，．／：；＜＝＞？＠［￥］＾＿｀｛｜｝～“”‘’]";

/// Rejects full-width characters that have a half-width equivalent.
///
/// Each line is tested against every class independently, so one line can
/// produce several findings. The combined output is ordered by line, and
/// findings on the same line keep the class order: space, paren, alphabet,
/// numeric, symbol.
#[derive(Debug, Clone)]
pub struct CharClassRule {
    classes: Vec<(FindingKind, Regex)>,
}

impl Default for CharClassRule {
    fn default() -> Self {
        Self::new()
    }
}

impl CharClassRule {
    #[must_use]
    pub fn new() -> Self {
        let classes = [
            (FindingKind::FullWidthSpace, FULL_WIDTH_SPACE),
            (FindingKind::FullWidthParen, FULL_WIDTH_PAREN),
            (FindingKind::FullWidthAlphabet, FULL_WIDTH_ALPHABET),
            (FindingKind::FullWidthNumeric, FULL_WIDTH_NUMERIC),
            (FindingKind::FullWidthSymbol, FULL_WIDTH_SYMBOL),
        ]
        .into_iter()
        .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("Invalid regex")))
        .collect();

        Self { classes }
    }
}

impl LineRule for CharClassRule {
    fn check(&self, file_name: &str, lines: &[&str]) -> Vec<Finding> {
        let mut findings: Vec<Finding> = self
            .classes
            .iter()
            .flat_map(|(kind, pattern)| {
                findings_where(file_name, lines, *kind, |line| pattern.is_match(line))
            })
            .collect();

        // Stable: same-line findings stay in class order.
        findings.sort_by_key(|f| f.line);
        findings
    }
}

#[cfg(test)]
#[path = "chars_tests.rs"]
mod tests;
