use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdocGuardError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan directory: {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdocGuardError {
    /// Short category name, used in debug logging.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::FileRead { .. } => "FileRead",
            Self::Walk { .. } => "Walk",
            Self::Io(_) => "Io",
        }
    }
}

pub type Result<T> = std::result::Result<T, AdocGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
