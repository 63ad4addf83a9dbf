//! Line-number column.

use std::fmt::Write as _;

/// Number of lines in `source`: one more than the number of `\n` bytes.
///
/// An empty source and a source ending in `\n` both count the final,
/// possibly empty, line.
pub fn line_count(source: &str) -> usize {
    memchr::memchr_iter(b'\n', source.as_bytes()).count() + 1
}

/// One `<div>` per line, numbered from 1 through `count`.
pub fn line_number_column(count: usize) -> String {
    let mut out = String::with_capacity(count * 16);
    for n in 1..=count {
        // Writing to a String cannot fail.
        let _ = write!(out, "<div>{n}</div>");
    }
    out
}
