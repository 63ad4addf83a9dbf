use super::*;

const ALL: [Tag; 13] = [
    Tag::Ident,
    Tag::Constant,
    Tag::Keyword,
    Tag::Builtin,
    Tag::Number,
    Tag::String,
    Tag::Docstring,
    Tag::Comment,
    Tag::Whitespace,
    Tag::Punct,
    Tag::UnterminatedString,
    Tag::UnterminatedDocstring,
    Tag::Stalled,
];

// === Discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(Tag::Ident as u8, 0);
    assert_eq!(Tag::Comment as u8, 7);
    assert_eq!(Tag::Whitespace as u8, 16);
    assert_eq!(Tag::Punct as u8, 17);
    assert_eq!(Tag::UnterminatedString as u8, 240);
    assert_eq!(Tag::Stalled as u8, 242);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<Tag>(), 1);
}

// === Predicates ===

#[test]
fn only_error_range_is_error() {
    for tag in ALL {
        let expected = matches!(
            tag,
            Tag::UnterminatedString | Tag::UnterminatedDocstring | Tag::Stalled
        );
        assert_eq!(tag.is_error(), expected, "{tag}");
    }
}

#[test]
fn word_tags() {
    let words: Vec<Tag> = ALL.into_iter().filter(|t| t.is_word()).collect();
    assert_eq!(
        words,
        vec![Tag::Ident, Tag::Constant, Tag::Keyword, Tag::Builtin]
    );
}

#[test]
fn passthrough_tags() {
    let raw: Vec<Tag> = ALL.into_iter().filter(|t| t.is_passthrough()).collect();
    assert_eq!(raw, vec![Tag::Whitespace, Tag::Punct]);
}

#[test]
fn names_are_unique() {
    let mut names: Vec<&str> = ALL.iter().map(|t| t.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ALL.len());
}

#[test]
fn display_uses_name() {
    assert_eq!(Tag::Builtin.to_string(), "Builtin");
    assert_eq!(Tag::UnterminatedDocstring.to_string(), "UnterminatedDocstring");
}
