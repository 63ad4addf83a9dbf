//! The `tokens` command: print the token stream of a file.

use std::fmt::Write as _;

use pyhl_lexer::{scan, TokenList};

use super::read_file;
use crate::CliError;

/// Scan a file and print one line per token.
pub fn tokens_file(path: &str) -> Result<(), CliError> {
    let content = read_file(path)?;
    let list = scan(&content).map_err(|source| CliError::Scan {
        path: path.to_string(),
        source,
    })?;
    print!("{}", format_tokens(path, &list));
    Ok(())
}

/// `Tag @ start..end "text"` per token, under a header line.
pub fn format_tokens(label: &str, list: &TokenList<'_>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Tokens for '{label}' ({} tokens):", list.len());
    for (token, text) in list.iter() {
        let _ = writeln!(out, "  {} @ {} {text:?}", token.tag, token.span);
    }
    out
}
