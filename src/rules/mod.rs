mod chars;
mod empty_lines;
mod encoding;
mod line_ending;
mod trailing_newline;
mod whitespace;

pub use chars::CharClassRule;
pub use empty_lines::EmptyLinesRule;
pub use encoding::{check_encoding, detect_encoding};
pub use line_ending::LineEndingRule;
pub use trailing_newline::TrailingNewlineRule;
pub use whitespace::WhitespaceRule;

use crate::finding::{Finding, FindingKind};

/// A stateless check over the decoded lines of one document.
///
/// Each line still carries its terminator. Line numbers in the returned
/// findings are 1-based.
pub trait LineRule {
    fn check(&self, file_name: &str, lines: &[&str]) -> Vec<Finding>;
}

/// One finding of `kind` for every line matching `pred`, in line order.
fn findings_where<P>(file_name: &str, lines: &[&str], kind: FindingKind, pred: P) -> Vec<Finding>
where
    P: Fn(&str) -> bool,
{
    lines
        .iter()
        .enumerate()
        .filter(|&(_, line)| pred(line))
        .map(|(i, _)| Finding::new(file_name, i + 1, kind))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
