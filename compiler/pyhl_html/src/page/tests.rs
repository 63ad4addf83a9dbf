use super::*;

#[test]
fn wraps_fragment_in_document() {
    let page = standalone_page("<pre class='python'></pre>", None);
    assert!(page.starts_with("<!DOCTYPE html>\n"));
    assert!(page.contains("<title>Python source</title>"));
    assert!(page.contains("<body>\n<pre class='python'></pre>\n</body>"));
    assert!(page.ends_with("</html>\n"));
}

#[test]
fn title_is_escaped() {
    let page = standalone_page("", Some("a<b> & \"c\""));
    assert!(page.contains("<title>a&lt;b&gt; &amp; &quot;c&quot;</title>"));
}

#[test]
fn stylesheet_embedded() {
    let page = standalone_page("", Some("t"));
    assert!(page.contains(DEFAULT_STYLESHEET));
}

#[test]
fn stylesheet_covers_every_class() {
    for class in [
        "codeLN",
        "codeText",
        "codeDocstr",
        "codeStr",
        "codeNum",
        "codeWord",
        "codeDefCnst",
        "codeBuiltIn",
        "codeKey",
        "codeComm",
        "codeErr",
    ] {
        assert!(
            DEFAULT_STYLESHEET.contains(&format!(".{class} ")),
            "no rule for {class}"
        );
    }
}
