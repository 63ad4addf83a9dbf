//! Token model: spans, tagged tokens and the scan output list.

use std::fmt;
use std::ops::Range;

use crate::Tag;

/// Half-open byte range into the source.
///
/// Offsets always fall on `char` boundaries of the scanned text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// A tagged span.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub tag: Tag,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(tag: Tag, span: Span) -> Self {
        Token { tag, span }
    }
}

/// What went wrong at an error-tagged token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum IssueKind {
    /// A string hit a newline or end of input before its closing quote.
    UnterminatedString,
    /// A docstring hit end of input before its closing delimiter.
    UnterminatedDocstring,
    /// The scanner made no progress and forced one character through.
    StalledProgress,
}

impl IssueKind {
    pub fn message(self) -> &'static str {
        match self {
            IssueKind::UnterminatedString => "unterminated string literal",
            IssueKind::UnterminatedDocstring => "unterminated docstring",
            IssueKind::StalledProgress => "unrecognized character",
        }
    }
}

/// A non-fatal problem found during a scan, located by span.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScanIssue {
    pub kind: IssueKind,
    pub span: Span,
}

impl fmt::Display for ScanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind.message(), self.span)
    }
}

/// Ordered output of one scan, borrowing the scanned source.
///
/// Tokens appear in source order and their spans tile the source exactly.
/// A `Stalled` token covers the one character the scanner forced through.
#[derive(Clone, Debug)]
pub struct TokenList<'a> {
    source: &'a str,
    tokens: Vec<Token>,
}

impl<'a> TokenList<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, tag: Tag, span: Span) {
        debug_assert!(span.end <= self.source.len(), "span {span} past end");
        self.tokens.push(Token::new(tag, span));
    }

    /// The scanned source.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Source text covered by `token`.
    #[inline]
    pub fn text(&self, token: &Token) -> &'a str {
        &self.source[token.span.range()]
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate `(token, text)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, &'a str)> + '_ {
        self.tokens.iter().map(move |t| (*t, self.text(t)))
    }

    /// Non-fatal problems, one per error-tagged token.
    pub fn issues(&self) -> impl Iterator<Item = ScanIssue> + '_ {
        self.tokens.iter().filter_map(|t| {
            let kind = match t.tag {
                Tag::UnterminatedString => IssueKind::UnterminatedString,
                Tag::UnterminatedDocstring => IssueKind::UnterminatedDocstring,
                Tag::Stalled => IssueKind::StalledProgress,
                _ => return None,
            };
            Some(ScanIssue { kind, span: t.span })
        })
    }

    pub fn has_issues(&self) -> bool {
        self.tokens.iter().any(|t| t.tag.is_error())
    }
}

#[cfg(test)]
mod tests;
