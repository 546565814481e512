use std::path::Path;

use crate::error::{AdocGuardError, Result};

/// A document read from disk: its display name and raw bytes.
///
/// Decoding is deferred so the encoding rule can inspect the raw bytes
/// before anything assumes the content is text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    bytes: Vec<u8>,
}

impl Document {
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a document from `path`. The document is named after the file's base name.
    ///
    /// # Errors
    /// Returns [`AdocGuardError::FileRead`] if the file cannot be read.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| AdocGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(display_name(path), bytes))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decode the content as UTF-8, or `None` if it is not valid UTF-8.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// Base name of `path`, falling back to the full path when there is none.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Split `text` into lines, keeping each line's terminator.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The last line may have no
/// terminator. Empty input yields no lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..=i]);
                start = i + 1;
            }
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                lines.push(&text[start..=i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
