mod filter;

pub use filter::{ExtensionFilter, FileFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{AdocGuardError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursive scanner. Entries are visited in file-name order, so the
/// result is stable across runs.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| AdocGuardError::Walk {
                path: source
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
                source,
            })?;

            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                log::debug!("discovered {}", entry.path().display());
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
