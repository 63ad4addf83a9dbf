//! The default command: convert Python sources to HTML.
//!
//! Reads stdin or one file and writes stdout (or `-o`). With several input
//! files each one is converted in parallel and written next to its input.

use std::io::Write;
use std::path::{Path, PathBuf};

use pyhl_lexer::{scan, ScanIssue};
use rayon::prelude::*;

use super::{read_file, read_stdin, STDIN_LABEL};
use crate::{CliError, HighlightConfig};

/// Result of converting one source text.
#[derive(Clone, Debug)]
pub struct Conversion {
    pub html: String,
    pub issues: Vec<ScanIssue>,
}

/// Totals over one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub converted: usize,
    pub failed: usize,
    pub issues: usize,
}

impl ConvertSummary {
    /// Whether the run should exit with a failure status.
    pub fn is_failure(&self, strict: bool) -> bool {
        self.failed > 0 || (strict && self.issues > 0)
    }
}

/// Scan and render `source`, logging every scan issue.
///
/// `label` names the source in log lines and error messages.
pub fn convert_source(
    label: &str,
    source: &str,
    config: &HighlightConfig,
) -> Result<Conversion, CliError> {
    let tokens = scan(source).map_err(|source| CliError::Scan {
        path: label.to_string(),
        source,
    })?;

    let issues: Vec<ScanIssue> = tokens.issues().collect();
    for issue in &issues {
        tracing::warn!(file = label, %issue, "scan issue");
        if config.strict {
            eprintln!("{label}: {issue}");
        }
    }

    let html = config.render.render(&tokens);
    tracing::debug!(
        file = label,
        tokens = tokens.len(),
        issues = issues.len(),
        "converted"
    );
    Ok(Conversion { html, issues })
}

/// Output path for an input in a multi-file run: `FILE` becomes `FILE.html`.
pub fn html_path(input: &str) -> PathBuf {
    PathBuf::from(format!("{input}.html"))
}

/// Run a conversion as described by `config`.
///
/// Per-file failures in a multi-file run are printed and counted rather
/// than returned, so one bad file does not stop the rest.
pub fn run_convert(config: &HighlightConfig) -> Result<ConvertSummary, CliError> {
    if config.reads_stdin() {
        let source = read_stdin()?;
        return convert_one(STDIN_LABEL, &source, config);
    }
    if let [path] = config.inputs.as_slice() {
        let source = read_file(path)?;
        return convert_one(path, &source, config);
    }

    let results: Vec<Result<usize, CliError>> = config
        .inputs
        .par_iter()
        .map(|path| convert_to_sibling(path, config))
        .collect();

    let mut summary = ConvertSummary::default();
    for result in results {
        match result {
            Ok(issues) => {
                summary.converted += 1;
                summary.issues += issues;
            }
            Err(e) => {
                eprintln!("error: {e}");
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}

fn convert_one(
    label: &str,
    source: &str,
    config: &HighlightConfig,
) -> Result<ConvertSummary, CliError> {
    let conversion = convert_source(label, source, config)?;
    match &config.output {
        Some(path) => write_file(path, &conversion.html)?,
        None => write_stdout(&conversion.html)?,
    }
    Ok(ConvertSummary {
        converted: 1,
        failed: 0,
        issues: conversion.issues.len(),
    })
}

fn convert_to_sibling(path: &str, config: &HighlightConfig) -> Result<usize, CliError> {
    let source = read_file(path)?;
    let conversion = convert_source(path, &source, config)?;
    let target = html_path(path);
    write_file(&target, &conversion.html)?;
    println!("Wrote: {}", target.display());
    Ok(conversion.issues.len())
}

fn write_file(path: &Path, html: &str) -> Result<(), CliError> {
    std::fs::write(path, html).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_stdout(html: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(html.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(CliError::Stdout)
}

#[cfg(test)]
mod tests;
