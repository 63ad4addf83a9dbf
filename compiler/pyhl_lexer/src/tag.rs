//! Classification tags attached to scanned spans.
//!
//! Discriminants are grouped by category so range checks stay cheap:
//!
//! | Range   | Category                         |
//! |---------|----------------------------------|
//! | 0-7     | Literals and words               |
//! | 16-18   | Trivia and passthrough           |
//! | 240-242 | Errors                           |

/// Category of a scanned span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    // === Literals & Words (0-7) ===
    /// Generic identifier (variable, function, attribute name).
    Ident = 0,
    /// Defined constant: `True`, `False`, `None`.
    Constant = 1,
    /// Reserved keyword.
    Keyword = 2,
    /// Built-in function or type name.
    Builtin = 3,
    /// Numeric literal, accepted permissively.
    Number = 4,
    /// Single- or double-quoted string, quotes included.
    String = 5,
    /// Triple-quoted string, delimiters included.
    Docstring = 6,
    /// Line comment from `#` up to the newline.
    Comment = 7,

    // === Trivia & Passthrough (16-18) ===
    /// Run of whitespace characters.
    Whitespace = 16,
    /// Any other single character: operators, brackets, the member-access dot.
    Punct = 17,

    // === Errors (240-242) ===
    /// String cut off by a newline or end of input.
    UnterminatedString = 240,
    /// Docstring cut off by end of input.
    UnterminatedDocstring = 241,
    /// One character emitted by the forward-progress guard.
    Stalled = 242,
}

impl Tag {
    /// Returns `true` for the error tags.
    #[inline]
    pub fn is_error(self) -> bool {
        self as u8 >= 240
    }

    /// Returns `true` for tags produced by identifier classification.
    #[inline]
    pub fn is_word(self) -> bool {
        matches!(
            self,
            Tag::Ident | Tag::Constant | Tag::Keyword | Tag::Builtin
        )
    }

    /// Returns `true` for tags whose text is emitted without a wrapper.
    #[inline]
    pub fn is_passthrough(self) -> bool {
        matches!(self, Tag::Whitespace | Tag::Punct)
    }

    /// Short, stable name used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Ident => "Ident",
            Tag::Constant => "Constant",
            Tag::Keyword => "Keyword",
            Tag::Builtin => "Builtin",
            Tag::Number => "Number",
            Tag::String => "String",
            Tag::Docstring => "Docstring",
            Tag::Comment => "Comment",
            Tag::Whitespace => "Whitespace",
            Tag::Punct => "Punct",
            Tag::UnterminatedString => "UnterminatedString",
            Tag::UnterminatedDocstring => "UnterminatedDocstring",
            Tag::Stalled => "Stalled",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
