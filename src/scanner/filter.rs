use std::path::Path;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose extension is exactly `extension`.
pub struct ExtensionFilter {
    extension: String,
}

impl ExtensionFilter {
    #[must_use]
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
