//! Hard scan failures.
//!
//! Malformed source is never an error here: unterminated literals and
//! stalled positions are encoded as error [`Tag`](crate::Tag)s on the
//! token stream. `ScanError` is reserved for an extractor being invoked
//! on a position that violates its entry contract.

use thiserror::Error;

/// A scan that could not continue.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ScanError {
    /// An extractor was started on text that is not its opening delimiter.
    #[error("invalid delimiter at byte {pos}: expected {expected}, found {found:?}")]
    InvalidDelimiter {
        /// Byte offset the extractor was started at.
        pos: usize,
        /// Human-readable description of the accepted delimiters.
        expected: &'static str,
        /// The text actually found there (may be shorter than a delimiter).
        found: String,
    },
}
