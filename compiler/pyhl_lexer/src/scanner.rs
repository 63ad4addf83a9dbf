//! Scan driver.
//!
//! The scanner walks the source left to right. At each position it looks at
//! the current character, hands off to the matching extractor, tags what
//! came back and appends it to a [`TokenList`]. It never backtracks.
//!
//! # Dispatch
//!
//! Checked in order, first match wins:
//!
//! | Current character            | Extractor           | Tag                              |
//! |------------------------------|---------------------|----------------------------------|
//! | whitespace                   | `pull_whitespace`   | `Whitespace`                     |
//! | `'''` or `"""`               | `pull_docstring`    | `Docstring` / `UnterminatedDocstring` |
//! | `'` or `"`                   | `pull_string`       | `String` / `UnterminatedString`  |
//! | digit ([`is_digit`])         | `pull_number`       | `Number`                         |
//! | alphanumeric or `_`          | `pull_identifier`   | via [`classify`]                 |
//! | `.`                          | number or member    | `Number`, or `Punct` + `Ident`   |
//! | `#`                          | `pull_comment`      | `Comment`                        |
//! | anything else                | one character       | `Punct`                          |
//!
//! # Forward progress
//!
//! A step that leaves the position unchanged (an alphanumeric character that
//! cannot start an identifier, such as `½`) is resolved by emitting that one
//! character as [`Tag::Stalled`] and moving past it. Every step therefore
//! consumes at least one character.

use crate::extract::{
    is_docstring_start, is_ident_continue, pull_comment, pull_docstring, pull_identifier,
    pull_number, pull_string, pull_whitespace, Pull,
};
use crate::keywords::classify;
use crate::{is_digit, ScanError, Span, Tag, TokenList};

/// Stateless-except-for-position scanner over one source text.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Start a scanner at the beginning of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scan to end of input.
    pub fn scan_all(mut self) -> Result<TokenList<'a>, ScanError> {
        let mut out = TokenList::new(self.source);
        while !self.is_eof() {
            self.step(&mut out)?;
        }
        tracing::trace!(
            bytes = self.source.len(),
            tokens = out.len(),
            "scan complete"
        );
        Ok(out)
    }

    /// Run one dispatch step, appending its tokens to `out`.
    ///
    /// Appends nothing at end of input. Otherwise consumes at least one
    /// character and appends one token, or two for member access.
    pub(crate) fn step(&mut self, out: &mut TokenList<'a>) -> Result<(), ScanError> {
        let start = self.pos;
        let Some(c) = self.source[start..].chars().next() else {
            return Ok(());
        };

        match c {
            c if c.is_whitespace() => self.whitespace(start, out),
            '\'' | '"' if is_docstring_start(self.source, start) => self.docstring(start, out)?,
            '\'' | '"' => self.string(start, out)?,
            c if is_digit(c) => self.number(start, out),
            c if is_ident_continue(c) => self.word(start, out),
            '.' => self.dot(start, out),
            '#' => self.comment(start, out),
            c => self.single(start, c, out),
        }

        if self.pos <= start {
            self.force_progress(start, c, out);
        }
        Ok(())
    }

    // ─── Trivia ─────────────────────────────────────────────────────

    fn whitespace(&mut self, start: usize, out: &mut TokenList<'a>) {
        let pull = pull_whitespace(self.source, start);
        self.emit(start, &pull, Tag::Whitespace, out);
    }

    fn comment(&mut self, start: usize, out: &mut TokenList<'a>) {
        let pull = pull_comment(self.source, start);
        self.emit(start, &pull, Tag::Comment, out);
    }

    // ─── Quoted Literals ────────────────────────────────────────────

    fn docstring(&mut self, start: usize, out: &mut TokenList<'a>) -> Result<(), ScanError> {
        let pull = pull_docstring(self.source, start)?;
        let tag = if pull.is_complete() {
            Tag::Docstring
        } else {
            Tag::UnterminatedDocstring
        };
        self.emit(start, &pull, tag, out);
        Ok(())
    }

    fn string(&mut self, start: usize, out: &mut TokenList<'a>) -> Result<(), ScanError> {
        let pull = pull_string(self.source, start)?;
        let tag = if pull.is_complete() {
            Tag::String
        } else {
            Tag::UnterminatedString
        };
        self.emit(start, &pull, tag, out);
        Ok(())
    }

    // ─── Numbers & Words ────────────────────────────────────────────

    fn number(&mut self, start: usize, out: &mut TokenList<'a>) {
        let pull = pull_number(self.source, start);
        self.emit(start, &pull, Tag::Number, out);
    }

    fn word(&mut self, start: usize, out: &mut TokenList<'a>) {
        let pull = pull_identifier(self.source, start);
        self.emit(start, &pull, classify(pull.text), out);
    }

    /// `.5` is a number; any other `.` is member access.
    ///
    /// Member access emits the dot as `Punct` and the member name, when
    /// there is one, as a plain `Ident`. Member names are never classified:
    /// `x.len` is an attribute, not the built-in.
    fn dot(&mut self, start: usize, out: &mut TokenList<'a>) {
        let after = start + 1;
        if self.source[after..].chars().next().is_some_and(is_digit) {
            let digits = pull_number(self.source, after);
            out.push(Tag::Number, Span::new(start, digits.end));
            self.pos = digits.end;
        } else {
            out.push(Tag::Punct, Span::new(start, after));
            self.pos = after;
            let member = pull_identifier(self.source, after);
            self.emit(after, &member, Tag::Ident, out);
        }
    }

    // ─── Fallback ───────────────────────────────────────────────────

    fn single(&mut self, start: usize, c: char, out: &mut TokenList<'a>) {
        let end = start + c.len_utf8();
        out.push(Tag::Punct, Span::new(start, end));
        self.pos = end;
    }

    fn force_progress(&mut self, start: usize, c: char, out: &mut TokenList<'a>) {
        tracing::debug!(pos = start, ch = ?c, "no progress; forcing one character through");
        let end = start + c.len_utf8();
        out.push(Tag::Stalled, Span::new(start, end));
        self.pos = end;
    }

    /// Append a non-empty pull and advance past it.
    #[inline]
    fn emit(&mut self, start: usize, pull: &Pull<'a>, tag: Tag, out: &mut TokenList<'a>) {
        if !pull.is_empty() {
            out.push(tag, Span::new(start, pull.end));
        }
        self.pos = pull.end;
    }
}

/// Scan `source` into a token list.
///
/// Fails only on an internal dispatch defect; malformed source produces
/// error-tagged tokens instead.
pub fn scan(source: &str) -> Result<TokenList<'_>, ScanError> {
    Scanner::new(source).scan_all()
}
