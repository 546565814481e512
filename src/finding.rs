use std::fmt;

/// The kind of formatting violation a [`Finding`] reports.
///
/// `Display` yields the message printed in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingKind {
    NotUtf8,
    LineEndingNotLf,
    FullWidthSpace,
    FullWidthParen,
    FullWidthAlphabet,
    FullWidthNumeric,
    FullWidthSymbol,
    MultipleWhitespaces,
    MultipleEmptyLines,
    MissingTrailingNewline,
}

impl FindingKind {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotUtf8 => "File encoding is not UTF-8",
            Self::LineEndingNotLf => "File line endings are not LF",
            Self::FullWidthSpace => "Contains invalid char(full width space)",
            Self::FullWidthParen => "Contains invalid char(full width paren)",
            Self::FullWidthAlphabet => "Contains invalid char(full width alphabet)",
            Self::FullWidthNumeric => "Contains invalid char(full width numeric)",
            Self::FullWidthSymbol => "Contains invalid char(full width symbol)",
            Self::MultipleWhitespaces => "Multiple consecutive whitespaces",
            Self::MultipleEmptyLines => "Multiple consecutive empty lines",
            Self::MissingTrailingNewline => "File does not end with a newline",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A single rule violation in a file.
///
/// `line` is 1-based; `0` marks a file-level finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub file_name: String,
    pub line: usize,
    pub kind: FindingKind,
}

impl Finding {
    #[must_use]
    pub fn new(file_name: &str, line: usize, kind: FindingKind) -> Self {
        Self {
            file_name: file_name.to_string(),
            line,
            kind,
        }
    }

    #[must_use]
    pub fn file_level(file_name: &str, kind: FindingKind) -> Self {
        Self::new(file_name, 0, kind)
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.file_name, self.line, self.kind)
    }
}

#[cfg(test)]
#[path = "finding_tests.rs"]
mod tests;
