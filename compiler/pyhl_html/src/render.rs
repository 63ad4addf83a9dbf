//! Token stream → HTML.

use pyhl_lexer::{scan, ScanError, Tag, TokenList};

use crate::{line_count, line_number_column, standalone_page, Emitter, StringEmitter};

/// Rendering switches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Add a line-number column next to the code.
    pub line_numbers: bool,
    /// Wrap the fragment in a complete HTML document with the default stylesheet.
    pub standalone: bool,
    /// Document title for standalone output.
    pub title: Option<String>,
}

/// CSS class for a tag, or `None` for text emitted without a wrapper.
pub fn css_class(tag: Tag) -> Option<&'static str> {
    match tag {
        Tag::Whitespace | Tag::Punct => None,
        Tag::Docstring => Some("codeDocstr"),
        Tag::UnterminatedDocstring => Some("codeDocstr codeErr"),
        Tag::String => Some("codeStr"),
        Tag::UnterminatedString => Some("codeStr codeErr"),
        Tag::Number => Some("codeNum"),
        Tag::Ident => Some("codeWord"),
        Tag::Constant => Some("codeDefCnst"),
        Tag::Keyword => Some("codeKey"),
        Tag::Builtin => Some("codeBuiltIn"),
        Tag::Comment => Some("codeComm"),
        Tag::Stalled => Some("codeErr"),
    }
}

/// Emit every token in source order, escaped and wrapped by class.
pub fn render_tokens<E: Emitter + ?Sized>(tokens: &TokenList<'_>, out: &mut E) {
    for (token, text) in tokens.iter() {
        match css_class(token.tag) {
            Some(class) => out.emit_span(class, text),
            None => out.emit_text(text),
        }
    }
}

impl RenderOptions {
    /// Render an already-scanned token list.
    pub fn render(&self, tokens: &TokenList<'_>) -> String {
        let source = tokens.source();
        let mut out = StringEmitter::with_capacity(source.len() * 2 + 256);

        if self.line_numbers {
            out.emit("<pre class='python'><table><tbody style='vertical-align:top;'><tr><td>");
            out.emit("<div class='codeLN'>");
            out.emit(&line_number_column(line_count(source)));
            out.emit("</div></td><td><div class='codeText'>");
            render_tokens(tokens, &mut out);
            out.emit("</div></td></tr></tbody></table></pre>");
        } else {
            out.emit("<pre class='python'><div class='codeText'>");
            render_tokens(tokens, &mut out);
            out.emit("</div></pre>");
        }

        tracing::trace!(
            tokens = tokens.len(),
            bytes = out.len(),
            line_numbers = self.line_numbers,
            "rendered fragment"
        );

        if self.standalone {
            standalone_page(out.as_str(), self.title.as_deref())
        } else {
            out.into_string()
        }
    }
}

/// Scan `source` and render it as HTML.
pub fn to_html(source: &str, options: &RenderOptions) -> Result<String, ScanError> {
    let tokens = scan(source)?;
    Ok(options.render(&tokens))
}
