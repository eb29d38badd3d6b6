//! Trim normalization used for counting.
//!
//! `normalize` never touches the buffer; it produces the view of the text that
//! count limits are measured against.

use std::borrow::Cow;

use super::buffer::grapheme_len;
use super::classify::is_horizontal_whitespace;
use super::constraints::TrimMode;

/// Normalize `text` according to `mode`.
///
/// Borrows when nothing needs to change.
pub fn normalize(text: &str, mode: TrimMode) -> Cow<'_, str> {
    if mode == TrimMode::None {
        return Cow::Borrowed(text);
    }

    let trimmed = if mode.trims_newlines() {
        // Line terminators are all whitespace, so this covers both kinds
        text.trim_matches(char::is_whitespace)
    } else {
        text.trim_matches(is_horizontal_whitespace)
    };

    if mode.drops_spaces() && trimmed.contains(' ') {
        Cow::Owned(trimmed.chars().filter(|&c| !is_space_char(c)).collect())
    } else {
        Cow::Borrowed(trimmed)
    }
}

#[inline]
fn is_space_char(ch: char) -> bool {
    ch == ' '
}

/// Length of `normalize(text, mode)` in grapheme clusters
pub fn normalized_count(text: &str, mode: TrimMode) -> usize {
    grapheme_len(&normalize(text, mode))
}
