//! Span extractors.
//!
//! Each extractor takes the whole source and a start offset, consumes one
//! lexical unit greedily, and returns a [`Pull`]: the consumed text, the
//! offset just past it, and whether the unit was properly closed. Only the
//! quoted forms can come back [`Status::Unterminated`].
//!
//! Extractors never look behind `start` and never allocate. The quoted
//! extractors check their opening delimiter and return
//! [`ScanError::InvalidDelimiter`] when called on anything else; the rest
//! tolerate any start position and may return an empty pull.

use crate::{is_digit, ScanError};

/// Result of one extractor call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pull<'a> {
    /// Consumed source text.
    pub text: &'a str,
    /// Offset immediately after the consumed text.
    pub end: usize,
    /// Whether the unit was closed.
    pub status: Status,
}

/// Whether a pulled unit reached its closing delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The unit ended normally, or needs no closing delimiter.
    Complete,
    /// A quoted unit hit a newline or end of input before its closing quote.
    Unterminated,
}

impl<'a> Pull<'a> {
    #[inline]
    fn new(source: &'a str, start: usize, end: usize, status: Status) -> Self {
        Pull {
            text: &source[start..end],
            end,
            status,
        }
    }

    #[inline]
    fn complete(source: &'a str, start: usize, end: usize) -> Self {
        Self::new(source, start, end, Status::Complete)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }

    /// Returns `true` when nothing was consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Pull the longest run of whitespace starting at `start`.
///
/// # Panics
///
/// If `start` is past the end of `source` or not on a `char` boundary.
pub fn pull_whitespace(source: &str, start: usize) -> Pull<'_> {
    let end = source[start..]
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map_or(source.len(), |(i, _)| start + i);
    Pull::complete(source, start, end)
}

/// Pull a triple-quoted docstring starting at `start`.
///
/// The three bytes at `start` must be `'''` or `"""`. The closing delimiter
/// is searched for after the opening one; if it never appears the pull runs
/// to end of input and is [`Status::Unterminated`].
pub fn pull_docstring(source: &str, start: usize) -> Result<Pull<'_>, ScanError> {
    let delim = match source.get(start..start + 3) {
        Some(d @ ("'''" | "\"\"\"")) => d,
        _ => {
            return Err(ScanError::InvalidDelimiter {
                pos: start,
                expected: "''' or \"\"\"",
                found: source.get(start..).unwrap_or("").chars().take(3).collect(),
            })
        }
    };

    let body = start + 3;
    match memchr::memmem::find(&source.as_bytes()[body..], delim.as_bytes()) {
        Some(offset) => Ok(Pull::complete(source, start, body + offset + 3)),
        None => Ok(Pull::new(source, start, source.len(), Status::Unterminated)),
    }
}

/// Pull a single- or double-quoted string starting at `start`.
///
/// A backslash escapes whatever single character follows it, including a
/// newline, the quote and another backslash. An unescaped newline or end of
/// input before the closing quote leaves the pull
/// [`Status::Unterminated`]; the newline itself is not consumed.
pub fn pull_string(source: &str, start: usize) -> Result<Pull<'_>, ScanError> {
    let rest = source.get(start..).unwrap_or("");
    let quote = match rest.chars().next() {
        Some(q @ ('\'' | '"')) => q,
        other => {
            return Err(ScanError::InvalidDelimiter {
                pos: start,
                expected: "' or \"",
                found: other.map(String::from).unwrap_or_default(),
            })
        }
    };

    let body = start + 1;
    let mut chars = source[body..].char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\n' => return Ok(Pull::new(source, start, body + i, Status::Unterminated)),
            c if c == quote => return Ok(Pull::complete(source, start, body + i + 1)),
            '\\' => {
                // Skip the escaped character. A trailing backslash escapes nothing.
                chars.next();
            }
            _ => {}
        }
    }
    Ok(Pull::new(source, start, source.len(), Status::Unterminated))
}

/// Pull a numeric literal starting at `start`.
///
/// Consumes any run of digits (see [`is_digit`]), `.`, `e` and `E` without
/// checking that the result is a well-formed number: `1.2.3e` and `1²` are
/// each accepted whole.
///
/// # Panics
///
/// If `start` is past the end of `source` or not on a `char` boundary.
pub fn pull_number(source: &str, start: usize) -> Pull<'_> {
    let end = source[start..]
        .char_indices()
        .find(|&(_, c)| !is_number_char(c))
        .map_or(source.len(), |(i, _)| start + i);
    Pull::complete(source, start, end)
}

/// Pull an identifier starting at `start`.
///
/// Returns an empty pull at `start` when the character there cannot begin
/// an identifier (or `start` is end of input).
///
/// # Panics
///
/// If `start` is past the end of `source` or not on a `char` boundary.
pub fn pull_identifier(source: &str, start: usize) -> Pull<'_> {
    let mut chars = source[start..].char_indices();
    match chars.next() {
        Some((_, c)) if is_ident_start(c) => {}
        _ => return Pull::complete(source, start, start),
    }
    let end = chars
        .find(|&(_, c)| !is_ident_continue(c))
        .map_or(source.len(), |(i, _)| start + i);
    Pull::complete(source, start, end)
}

/// Pull a line comment starting at `start`.
///
/// Runs up to, not including, the next `\n`, or to end of input.
///
/// # Panics
///
/// If `start` is past the end of `source` or not on a `char` boundary.
pub fn pull_comment(source: &str, start: usize) -> Pull<'_> {
    let end = memchr::memchr(b'\n', &source.as_bytes()[start..]).map_or(source.len(), |i| start + i);
    Pull::complete(source, start, end)
}

/// Returns `true` if `source[pos..]` opens a docstring.
#[inline]
pub fn is_docstring_start(source: &str, pos: usize) -> bool {
    matches!(
        source.as_bytes().get(pos..pos + 3),
        Some(b"'''" | b"\"\"\"")
    )
}

#[inline]
pub(crate) fn is_number_char(c: char) -> bool {
    is_digit(c) || matches!(c, '.' | 'e' | 'E')
}

#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
