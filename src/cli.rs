use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "adoc-guard")]
#[command(author, version, about = "AsciiDoc style guard - report formatting violations")]
#[command(long_about = "Checks every .adoc file under a directory for encoding, line-ending,\n\
    full-width character, whitespace and blank-line violations.\n\n\
    Findings are printed to stderr as `<file> <line> <message>`.\n\n\
    Exit codes:\n  \
    0 - No findings\n  \
    1 - Findings reported\n  \
    2 - Usage or I/O error")]
pub struct Cli {
    /// Input AsciiDoc directory path
    #[arg(short = 'i', long = "input", value_name = "DIR")]
    pub input: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
