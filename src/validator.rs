use std::path::Path;

use crate::document::{Document, split_lines};
use crate::error::Result;
use crate::finding::{Finding, FindingKind};
use crate::rules::{
    CharClassRule, EmptyLinesRule, LineEndingRule, LineRule, TrailingNewlineRule, WhitespaceRule,
    check_encoding,
};

/// Runs every rule over a document, in a fixed order.
///
/// Order: encoding, line ending, character classes, whitespace, empty lines,
/// trailing newline. A document that fails the encoding check gets only the
/// encoding finding; nothing else is decoded or checked.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    line_ending: LineEndingRule,
    chars: CharClassRule,
    whitespace: WhitespaceRule,
    empty_lines: EmptyLinesRule,
    trailing_newline: TrailingNewlineRule,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and validate the file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn validate_file(&self, path: &Path) -> Result<Vec<Finding>> {
        let document = Document::read(path)?;
        let findings = self.validate(&document);
        log::debug!("{}: {} finding(s)", path.display(), findings.len());
        Ok(findings)
    }

    #[must_use]
    pub fn validate(&self, document: &Document) -> Vec<Finding> {
        let name = document.name();

        let encoding = check_encoding(name, document.bytes());
        if !encoding.is_empty() {
            return encoding;
        }
        let Some(text) = document.text() else {
            return vec![Finding::file_level(name, FindingKind::NotUtf8)];
        };

        self.validate_lines(name, &split_lines(text))
    }

    /// Run the line rules over already decoded lines.
    #[must_use]
    pub fn validate_lines(&self, file_name: &str, lines: &[&str]) -> Vec<Finding> {
        let mut findings = Vec::new();
        findings.extend(self.line_ending.check(file_name, lines));
        findings.extend(self.chars.check(file_name, lines));
        findings.extend(self.whitespace.check(file_name, lines));
        findings.extend(self.empty_lines.check(file_name, lines));

        if lines.is_empty() {
            log::debug!("{file_name}: empty document, skipping trailing newline check");
        } else {
            findings.extend(self.trailing_newline.check(file_name, lines));
        }

        findings
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
