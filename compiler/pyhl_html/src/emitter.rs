//! Markup sink used by the renderer.
//!
//! [`render_tokens`](crate::render_tokens) only talks to [`Emitter`]. Source
//! text goes through `emit_text` or `emit_span`, which escape it; fixed
//! markup goes through `emit`.

use crate::escape_html;

/// Receives rendered markup in order.
pub trait Emitter {
    /// Emit a markup fragment verbatim. Never pass source text here.
    fn emit(&mut self, markup: &str);

    /// Emit source text, escaped.
    fn emit_text(&mut self, text: &str) {
        self.emit(&escape_html(text));
    }

    /// Emit source text wrapped in `<span class='…'>`.
    fn emit_span(&mut self, class: &str, text: &str) {
        self.emit("<span class='");
        self.emit(class);
        self.emit("'>");
        self.emit_text(text);
        self.emit("</span>");
    }
}

/// Emitter that accumulates markup in a `String`.
#[derive(Debug, Default)]
pub struct StringEmitter {
    html: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with room for `bytes` of markup.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            html: String::with_capacity(bytes),
        }
    }

    /// Markup written so far.
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    pub fn into_string(self) -> String {
        self.html
    }
}

impl Emitter for StringEmitter {
    #[inline]
    fn emit(&mut self, markup: &str) {
        self.html.push_str(markup);
    }
}

impl From<StringEmitter> for String {
    fn from(emitter: StringEmitter) -> Self {
        emitter.html
    }
}
