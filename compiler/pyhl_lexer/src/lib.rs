//! Single-pass Python lexer for syntax highlighting.
//!
//! The lexer splits source text into a flat stream of tagged spans. It is
//! greedy and stateless apart from its position: each step looks at the
//! current character, hands off to one span extractor, tags the result and
//! moves on. Nothing is ever parsed into a tree.
//!
//! # Layers
//!
//! - [`extract`]: pure span extractors, one per lexical category.
//! - [`keywords`]: the fixed constant / keyword / built-in tables.
//! - [`is_digit`]: the Unicode digit table shared by numbers and `.5`.
//! - [`Scanner`]: the driver that dispatches by character class and
//!   guarantees forward progress.
//!
//! Malformed input never fails a scan. Unterminated strings and docstrings
//! are tagged as errors and scanning continues after them. The only hard
//! failure is [`ScanError`], which signals a dispatch defect.

mod digits;
mod error;
pub mod extract;
pub mod keywords;
mod scanner;
mod tag;
mod token;

pub use digits::is_digit;
pub use error::ScanError;
pub use scanner::{scan, Scanner};
pub use tag::Tag;
pub use token::{IssueKind, ScanIssue, Span, Token, TokenList};
