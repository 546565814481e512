use clap::Parser;
use rayon::prelude::*;

use adoc_guard::cli::Cli;
use adoc_guard::finding::Finding;
use adoc_guard::output::{TextFormatter, write_report};
use adoc_guard::scanner::{DirectoryScanner, ExtensionFilter, FileScanner};
use adoc_guard::validator::Validator;
use adoc_guard::{DOCUMENT_EXTENSION, EXIT_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let exit_code = run(&cli);
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            log::debug!("aborting on {} error", e.error_type());
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> adoc_guard::Result<i32> {
    // 1. Discover documents
    let scanner = DirectoryScanner::new(ExtensionFilter::new(DOCUMENT_EXTENSION));
    let files = scanner.scan(&cli.input)?;
    log::debug!("found {} document(s) under {}", files.len(), cli.input.display());

    // 2. Validate each file (parallel, results keep scan order)
    let validator = Validator::new();
    let per_file: Vec<Vec<Finding>> = files
        .par_iter()
        .map(|path| validator.validate_file(path))
        .collect::<adoc_guard::Result<_>>()?;
    let findings: Vec<Finding> = per_file.into_iter().flatten().collect();

    if findings.is_empty() {
        return Ok(EXIT_SUCCESS);
    }

    // 3. Report to stderr
    let mut stderr = std::io::stderr().lock();
    write_report(&TextFormatter, &findings, &mut stderr)?;
    Ok(EXIT_FINDINGS)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
