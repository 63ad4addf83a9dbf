//! Reserved-character escaping.

use std::borrow::Cow;

/// Replace `&`, `<`, `>` and `"` with their HTML entities.
///
/// Text with nothing to escape is returned borrowed. Not idempotent: `&`
/// in an already-escaped entity is escaped again, so apply exactly once.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first) = find_reserved(bytes) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Position of the first reserved byte.
///
/// `memchr3` takes at most three needles, so the quote gets its own search.
fn find_reserved(bytes: &[u8]) -> Option<usize> {
    let angle_or_amp = memchr::memchr3(b'&', b'<', b'>', bytes);
    let quote = memchr::memchr(b'"', bytes);
    match (angle_or_amp, quote) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}
