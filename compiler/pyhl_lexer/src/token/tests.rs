use super::*;
use pretty_assertions::assert_eq;

// === Span ===

#[test]
fn span_len_and_empty() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert!(Span::new(5, 5).is_empty());
}

#[test]
fn span_from_range() {
    assert_eq!(Span::from(2..9), Span::new(2, 9));
    assert_eq!(Span::new(2, 9).range(), 2..9);
}

#[test]
fn span_display() {
    assert_eq!(Span::new(1, 4).to_string(), "1..4");
    assert_eq!(format!("{:?}", Span::new(0, 0)), "0..0");
}

// === TokenList ===

#[test]
fn text_slices_source() {
    let mut list = TokenList::new("x = 1");
    list.push(Tag::Ident, Span::new(0, 1));
    list.push(Tag::Whitespace, Span::new(1, 2));
    list.push(Tag::Punct, Span::new(2, 3));

    let texts: Vec<&str> = list.iter().map(|(_, text)| text).collect();
    assert_eq!(texts, vec!["x", " ", "="]);
    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
    assert_eq!(list.source(), "x = 1");
}

#[test]
fn issues_reported_for_error_tags_only() {
    let mut list = TokenList::new("'ab\n\"\"\"z");
    list.push(Tag::UnterminatedString, Span::new(0, 3));
    list.push(Tag::Whitespace, Span::new(3, 4));
    list.push(Tag::UnterminatedDocstring, Span::new(4, 8));

    let issues: Vec<ScanIssue> = list.issues().collect();
    assert_eq!(
        issues,
        vec![
            ScanIssue {
                kind: IssueKind::UnterminatedString,
                span: Span::new(0, 3),
            },
            ScanIssue {
                kind: IssueKind::UnterminatedDocstring,
                span: Span::new(4, 8),
            },
        ]
    );
    assert!(list.has_issues());
}

#[test]
fn clean_list_has_no_issues() {
    let mut list = TokenList::new("a");
    list.push(Tag::Ident, Span::new(0, 1));
    assert!(!list.has_issues());
    assert_eq!(list.issues().count(), 0);
}

#[test]
fn issue_display() {
    let issue = ScanIssue {
        kind: IssueKind::StalledProgress,
        span: Span::new(2, 4),
    };
    assert_eq!(issue.to_string(), "unrecognized character at 2..4");
}
