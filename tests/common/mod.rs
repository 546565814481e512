#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the adoc-guard binary.
#[macro_export]
macro_rules! adoc_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("adoc-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    /// Creates a file with raw (possibly non-UTF-8) content.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A document that violates no rule.
pub const COMPLIANT_DOC: &str = "= ガイド\n\n本文です。\n\n== Usage\n\nRun the tool (once).\n";

/// "文字列" encoded as Shift_JIS, followed by a newline.
pub const SHIFT_JIS_DOC: &[u8] = &[0x95, 0xb6, 0x8e, 0x9a, 0x97, 0xf1, b'\n'];

/// "文字列" encoded as ISO-2022-JP (7-bit, ESC sequences), followed by a newline.
pub const ISO_2022_JP_DOC: &[u8] = b"\x1b$BJ8;zNs\x1b(B\n";
