//! Input-break filtering.
//!
//! Decides how much of a proposed insertion may be typed under an
//! [`InputBreakMode`]. The scan stops at the first disallowed cluster and keeps
//! everything before it; nothing after a violation is retried.

use super::buffer::Graphemes;
use super::classify::{char_class, is_space_run, CharClass};
use super::constraints::InputBreakMode;

/// Filter `insertion` given the cluster directly before the insertion point.
///
/// Returns the admissible prefix of `insertion` (possibly empty, never longer).
pub fn filter_insertion<'a>(
    preceding: Option<&str>,
    insertion: &'a str,
    mode: InputBreakMode,
) -> &'a str {
    if mode == InputBreakMode::None || insertion.is_empty() {
        return insertion;
    }

    let graphemes = Graphemes::new(insertion);
    match first_violation(preceding, &graphemes, mode) {
        Some(index) => {
            tracing::trace!(?mode, index, "input break truncated insertion");
            graphemes.prefix(index)
        }
        None => insertion,
    }
}

/// Filter `insertion` on its own, with no buffer context.
///
/// The first cluster has no predecessor, so it can never start a space run.
pub fn filter_standalone(insertion: &str, mode: InputBreakMode) -> &str {
    filter_insertion(None, insertion, mode)
}

/// Index of the first cluster `mode` refuses, if any
fn first_violation(
    preceding: Option<&str>,
    graphemes: &Graphemes<'_>,
    mode: InputBreakMode,
) -> Option<usize> {
    let mut previous = preceding;
    for (index, current) in graphemes.iter().enumerate() {
        let refused = match char_class(current) {
            CharClass::Newline => mode.blocks_newline(),
            CharClass::Space => {
                mode.blocks_space() || (mode.blocks_space_run() && is_space_run(previous, current))
            }
            CharClass::OtherWhitespace | CharClass::Visible => false,
        };
        if refused {
            return Some(index);
        }
        previous = Some(current);
    }
    None
}
