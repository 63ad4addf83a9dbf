use super::*;

// === Table invariants ===

#[test]
fn tables_are_sorted_and_unique() {
    for table in [CONSTANTS, KEYWORDS, BUILTINS] {
        for pair in table.windows(2) {
            assert!(pair[0] < pair[1], "{:?} not before {:?}", pair[0], pair[1]);
        }
    }
}

#[test]
fn tables_are_disjoint() {
    for word in CONSTANTS {
        assert!(!KEYWORDS.contains(word), "{word} in constants and keywords");
        assert!(!BUILTINS.contains(word), "{word} in constants and built-ins");
    }
    for word in KEYWORDS {
        assert!(!BUILTINS.contains(word), "{word} in keywords and built-ins");
    }
}

#[test]
fn every_entry_passes_length_guard() {
    for word in CONSTANTS.iter().chain(KEYWORDS).chain(BUILTINS) {
        assert!(lookup(word).is_some(), "{word} rejected by guard");
    }
}

#[test]
fn table_sizes() {
    assert_eq!(CONSTANTS.len(), 3);
    assert_eq!(KEYWORDS.len(), 32);
    assert_eq!(BUILTINS.len(), 69);
}

// === Classification ===

#[test]
fn constants() {
    assert_eq!(classify("True"), Tag::Constant);
    assert_eq!(classify("False"), Tag::Constant);
    assert_eq!(classify("None"), Tag::Constant);
}

#[test]
fn control_flow_keywords() {
    for word in ["if", "elif", "else", "for", "while", "break", "continue", "return"] {
        assert_eq!(classify(word), Tag::Keyword, "{word}");
    }
}

#[test]
fn declaration_keywords() {
    for word in ["def", "class", "lambda", "global", "nonlocal", "import", "from", "as"] {
        assert_eq!(classify(word), Tag::Keyword, "{word}");
    }
}

#[test]
fn async_keywords() {
    assert_eq!(classify("async"), Tag::Keyword);
    assert_eq!(classify("await"), Tag::Keyword);
}

#[test]
fn builtins() {
    assert_eq!(classify("len"), Tag::Builtin);
    assert_eq!(classify("id"), Tag::Builtin);
    assert_eq!(classify("staticmethod"), Tag::Builtin);
    assert_eq!(classify("__import__"), Tag::Builtin);
}

#[test]
fn print_is_builtin_not_keyword() {
    assert_eq!(classify("print"), Tag::Builtin);
}

#[test]
fn generic_identifiers() {
    assert_eq!(classify("myVar"), Tag::Ident);
    assert_eq!(classify("x"), Tag::Ident);
    assert_eq!(classify("_"), Tag::Ident);
    assert_eq!(classify("__init__"), Tag::Ident);
    assert_eq!(classify("self"), Tag::Ident);
}

#[test]
fn case_sensitive() {
    assert_eq!(classify("true"), Tag::Ident);
    assert_eq!(classify("If"), Tag::Ident);
    assert_eq!(classify("LEN"), Tag::Ident);
}

#[test]
fn too_long_or_short_rejected() {
    assert_eq!(lookup("a"), None);
    assert_eq!(lookup("staticmethodx"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn non_ascii_start_rejected() {
    assert_eq!(lookup("élan"), None);
    assert_eq!(classify("ñame"), Tag::Ident);
}

#[test]
fn classification_is_idempotent() {
    for word in ["if", "len", "True", "spam"] {
        assert_eq!(classify(word), classify(word));
    }
}
