pub mod cli;
pub mod document;
pub mod error;
pub mod finding;
pub mod output;
pub mod rules;
pub mod scanner;
pub mod validator;

pub use error::{AdocGuardError, Result};

/// Extension of the documents picked up by the scanner.
pub const DOCUMENT_EXTENSION: &str = "adoc";

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
