//! Command handlers for the `pyhl` CLI.
//!
//! Shared input helpers live here in the module root.

use std::io::Read;

use crate::CliError;

mod convert;
mod tokens;

pub use convert::{convert_source, html_path, run_convert, Conversion, ConvertSummary};
pub use tokens::{format_tokens, tokens_file};

/// Label used in messages for standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// Read a source file, classifying the common failures.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))
}

fn read_stdin() -> Result<String, CliError> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(CliError::Stdin)?;
    Ok(content)
}
