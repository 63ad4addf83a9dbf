//! Identifier classification tables.
//!
//! Three disjoint, sorted tables:
//! 1. **Constants**: `False`, `None`, `True`
//! 2. **Keywords**: the Python 3 reserved words
//! 3. **Built-ins**: names bound in `builtins` that are commonly called
//!
//! `print` is a built-in function, not a keyword (Python 3 semantics).
//!
//! Every table is sorted by byte order so lookup is a binary search. All
//! entries are 2-12 bytes long and start with an ASCII letter or `_`, which
//! gives a cheap rejection path before any comparison.

use crate::Tag;

/// Defined constants.
pub const CONSTANTS: &[&str] = &["False", "None", "True"];

/// Reserved keywords.
pub const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Built-in function and type names.
pub const BUILTINS: &[&str] = &[
    "__import__",
    "abs",
    "all",
    "any",
    "ascii",
    "bin",
    "bool",
    "breakpoint",
    "bytearray",
    "bytes",
    "callable",
    "chr",
    "classmethod",
    "compile",
    "complex",
    "delattr",
    "dict",
    "dir",
    "divmod",
    "enumerate",
    "eval",
    "exec",
    "filter",
    "float",
    "format",
    "frozenset",
    "getattr",
    "globals",
    "hasattr",
    "hash",
    "help",
    "hex",
    "id",
    "input",
    "int",
    "isinstance",
    "issubclass",
    "iter",
    "len",
    "list",
    "locals",
    "map",
    "max",
    "memoryview",
    "min",
    "next",
    "object",
    "oct",
    "open",
    "ord",
    "pow",
    "print",
    "property",
    "range",
    "repr",
    "reversed",
    "round",
    "set",
    "setattr",
    "slice",
    "sorted",
    "staticmethod",
    "str",
    "sum",
    "super",
    "tuple",
    "type",
    "vars",
    "zip",
];

/// Look up a reserved name.
///
/// Returns `Some(Tag::Constant | Tag::Keyword | Tag::Builtin)` when `text`
/// is in one of the tables, checked in that priority order, and `None` for
/// an ordinary identifier.
#[inline]
pub fn lookup(text: &str) -> Option<Tag> {
    let bytes = text.as_bytes();
    if !(2..=12).contains(&bytes.len()) {
        return None;
    }
    let first = bytes[0];
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }

    if contains(CONSTANTS, text) {
        Some(Tag::Constant)
    } else if contains(KEYWORDS, text) {
        Some(Tag::Keyword)
    } else if contains(BUILTINS, text) {
        Some(Tag::Builtin)
    } else {
        None
    }
}

/// Classify an identifier, falling back to [`Tag::Ident`].
///
/// Position-independent: the same text always gets the same tag.
#[inline]
pub fn classify(text: &str) -> Tag {
    lookup(text).unwrap_or(Tag::Ident)
}

#[inline]
fn contains(table: &[&str], text: &str) -> bool {
    table.binary_search(&text).is_ok()
}

#[cfg(test)]
mod tests;
