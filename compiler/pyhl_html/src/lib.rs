//! HTML rendering for pyhl token streams.
//!
//! Turns the tagged spans produced by [`pyhl_lexer`] into markup whose CSS
//! classes a stylesheet can colorize. Every piece of source text goes
//! through [`escape_html`] exactly once on its way out.
//!
//! # Output shape
//!
//! ```text
//! <pre class='python'><div class='codeText'>…tokens…</div></pre>
//! ```
//!
//! With line numbers the token column sits next to a `codeLN` column in a
//! one-row table. [`RenderOptions::standalone`] wraps either form in a full
//! HTML document with the default stylesheet.

mod emitter;
mod escape;
mod line_numbers;
mod page;
mod render;

pub use emitter::{Emitter, StringEmitter};
pub use escape::escape_html;
pub use line_numbers::{line_count, line_number_column};
pub use page::{standalone_page, DEFAULT_STYLESHEET};
pub use render::{css_class, render_tokens, to_html, RenderOptions};

pub use pyhl_lexer::ScanError;
