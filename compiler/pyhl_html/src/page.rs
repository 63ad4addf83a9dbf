//! Standalone HTML document wrapper.

use crate::escape_html;

/// Stylesheet covering every class the renderer emits.
pub const DEFAULT_STYLESHEET: &str = "\
pre.python { background: #1e1f22; color: #d4d4d4; padding: 0.75em 1em; \
border-radius: 4px; font-family: Menlo, Consolas, monospace; line-height: 1.4; }
pre.python table { border-collapse: collapse; }
pre.python .codeLN { color: #6e7681; text-align: right; padding-right: 1em; \
border-right: 1px solid #3c3f41; margin-right: 1em; user-select: none; }
pre.python .codeText { white-space: pre; }
.codeDocstr { color: #6a9955; font-style: italic; }
.codeStr { color: #ce9178; }
.codeNum { color: #b5cea8; }
.codeWord { color: #9cdcfe; }
.codeDefCnst { color: #569cd6; font-weight: bold; }
.codeBuiltIn { color: #dcdcaa; }
.codeKey { color: #c586c0; font-weight: bold; }
.codeComm { color: #6a737d; font-style: italic; }
.codeErr { text-decoration: underline wavy #f14c4c; }
";

/// Wrap a rendered fragment in a minimal HTML5 document.
///
/// `title` is escaped; `fragment` is inserted as-is.
pub fn standalone_page(fragment: &str, title: Option<&str>) -> String {
    let title = escape_html(title.unwrap_or("Python source"));
    let mut page = String::with_capacity(fragment.len() + DEFAULT_STYLESHEET.len() + 256);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    page.push_str(&title);
    page.push_str("</title>\n<style>\n");
    page.push_str(DEFAULT_STYLESHEET);
    page.push_str("</style>\n</head>\n<body>\n");
    page.push_str(fragment);
    page.push_str("\n</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests;
