//! Character classification for input filtering and trimming.
//!
//! Every predicate takes a grapheme cluster (`&str`), the same unit the rest of
//! the engine uses for offsets and counts.
//!
//! There is one notion of a line break for the whole engine: a cluster made of
//! line terminators (`\n`, `\r`, `\r\n`, VT, FF, NEL, U+2028, U+2029). The
//! break filter, the line oracles and the trim modes all agree on it.

/// Classes a grapheme cluster can fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// The literal space character `' '`
    Space,
    /// A line break (see [`is_newline`])
    Newline,
    /// Any other whitespace (tab, no-break space, form feed, ...)
    OtherWhitespace,
    /// Everything else
    Visible,
}

/// Get the class of a grapheme cluster
pub fn char_class(grapheme: &str) -> CharClass {
    if is_space(grapheme) {
        CharClass::Space
    } else if is_newline(grapheme) {
        CharClass::Newline
    } else if !grapheme.is_empty() && grapheme.chars().all(char::is_whitespace) {
        CharClass::OtherWhitespace
    } else {
        CharClass::Visible
    }
}

/// Check if a grapheme is the literal space character
#[inline]
pub fn is_space(grapheme: &str) -> bool {
    grapheme == " "
}

/// Check if a grapheme is a line break.
///
/// `"\r\n"` segments as a single cluster, so it is one break like `"\n"`.
/// Terminators are control characters and never combine with anything else.
#[inline]
pub fn is_newline(grapheme: &str) -> bool {
    !grapheme.is_empty() && grapheme.chars().all(is_line_terminator)
}

/// Check if `current` continues a run of spaces started by `previous`
#[inline]
pub fn is_space_run(previous: Option<&str>, current: &str) -> bool {
    previous.is_some_and(is_space) && is_space(current)
}

/// Check if a char terminates a line
pub fn is_line_terminator(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Whitespace that does not break lines (space, tab, no-break space, ...)
pub fn is_horizontal_whitespace(ch: char) -> bool {
    ch.is_whitespace() && !is_line_terminator(ch)
}
