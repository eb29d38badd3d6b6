//! Invariants checked across every mode and a spread of sample texts

mod common;

use common::{assign, committed, field, live, ALL_BREAK_MODES, ALL_TRIM_MODES, SAMPLES};
use textgate::editable::{
    char_class, filter_insertion, grapheme_len, normalize, normalized_count, CharClass,
    EditProposal, EditableText, Graphemes, HardLineBreaks, InputBreakMode, LineOracle,
    MonospaceWrap, StylePolicy, TrimMode,
};

const INSERTIONS: [&str; 8] = [
    " ",
    "\n",
    "x",
    "  ",
    "two words",
    "multi\nline\npaste",
    " \t edge \t ",
    "\u{1F1EF}\u{1F1F5} e\u{0301}",
];

#[test]
fn test_normalize_is_idempotent() {
    for mode in ALL_TRIM_MODES {
        for text in SAMPLES.iter().chain(INSERTIONS.iter()) {
            let once = normalize(text, mode).into_owned();
            assert_eq!(normalize(&once, mode), once, "mode {:?}, text {:?}", mode, text);
        }
    }
}

/// Normalized counts of every cluster prefix of `text`
fn prefix_counts(text: &str, mode: TrimMode) -> (Graphemes<'_>, Vec<usize>) {
    let graphemes = Graphemes::new(text);
    let counts = (0..=graphemes.len())
        .map(|n| normalized_count(graphemes.prefix(n), mode))
        .collect();
    (graphemes, counts)
}

#[test]
fn test_untrimmed_count_is_prefix_length() {
    for text in SAMPLES.iter().chain(INSERTIONS.iter()) {
        let (_, counts) = prefix_counts(text, TrimMode::None);
        for (n, count) in counts.iter().enumerate() {
            assert_eq!(*count, n, "text {:?}", text);
        }
    }
}

// Appending cluster `n` to the first `n` clusters:
// - a trailing blank adds nothing (it is trimmed at the end),
// - anything else adds at least 1 if visible, and at most 1 plus the
//   clusters the shorter prefix had trimmed off its end (`n - count`),
//   which the new cluster pulls back into the interior.
#[test]
fn test_edge_trim_count_steps_are_bounded() {
    for mode in [TrimMode::Whitespaces, TrimMode::WhitespacesAndNewlines] {
        for text in SAMPLES.iter().chain(INSERTIONS.iter()) {
            let (graphemes, counts) = prefix_counts(text, mode);
            for n in 0..graphemes.len() {
                let next = graphemes.get(n).unwrap_or_default();
                let (before, after) = (counts[n], counts[n + 1]);
                let context = format!("mode {:?}, text {:?}, prefix {}", mode, text, n);
                assert!(before <= after, "{}", context);
                assert!(after - before <= 1 + (n - before), "{}", context);
                if char_class(next) == CharClass::Visible {
                    assert!(after > before, "{}", context);
                }
            }
        }
    }
}

// Blank modes drop interior spaces too, so on top of the edge bounds a
// trailing space never moves the count.
#[test]
fn test_blank_trim_count_steps_are_bounded() {
    for mode in [
        TrimMode::BlankWithWhitespaces,
        TrimMode::BlankWithWhitespacesAndNewlines,
    ] {
        for text in SAMPLES.iter().chain(INSERTIONS.iter()) {
            let (graphemes, counts) = prefix_counts(text, mode);
            for n in 0..graphemes.len() {
                let next = graphemes.get(n).unwrap_or_default();
                let (before, after) = (counts[n], counts[n + 1]);
                let context = format!("mode {:?}, text {:?}, prefix {}", mode, text, n);
                assert!(before <= after, "{}", context);
                assert!(after - before <= 1 + (n - before), "{}", context);
                match char_class(next) {
                    CharClass::Visible => assert!(after > before, "{}", context),
                    CharClass::Space => assert_eq!(after, before, "{}", context),
                    _ => {}
                }
                let spaced = format!("{} ", graphemes.prefix(n + 1));
                assert_eq!(normalized_count(&spaced, mode), after, "{}", context);
            }
        }
    }
}

#[test]
fn test_filter_never_lengthens() {
    for mode in ALL_BREAK_MODES {
        for preceding in [None, Some(" "), Some("x"), Some("\n")] {
            for insertion in INSERTIONS {
                let filtered = filter_insertion(preceding, insertion, mode);
                assert!(grapheme_len(filtered) <= grapheme_len(insertion));
                assert!(insertion.starts_with(filtered));
            }
        }
    }
}

#[test]
fn test_continuous_whitespace_context() {
    let mode = InputBreakMode::ContinuousWhiteSpace;
    assert_eq!(filter_insertion(Some(" "), " ", mode), "");
    assert_eq!(filter_insertion(Some("x"), " ", mode), " ");
}

/// Type every insertion at the start, middle and end of fields built by `make`
fn check_typing_stays_within_limits<O, F>(make: F)
where
    O: LineOracle,
    F: Fn(&str, StylePolicy) -> EditableText<O>,
{
    let limits = [(0, 1), (3, 1), (5, 2), (8, 3)];
    for trim in ALL_TRIM_MODES {
        for (count, lines) in limits {
            let policy = StylePolicy::default()
                .trim(trim)
                .limit_count_and_line(count, lines);
            for text in SAMPLES {
                let mut f = make(text, policy);
                for insertion in INSERTIONS {
                    let len = grapheme_len(f.text());
                    for at in [0, len / 2, len] {
                        f.set_cursor(at);
                        f.type_text(insertion);
                        assert!(
                            f.normalized_count() <= count,
                            "{:?} over count {} after inserting {:?}",
                            f.text(),
                            count,
                            insertion
                        );
                        assert!(
                            f.visual_line_count() <= lines,
                            "{:?} over {} lines after inserting {:?}",
                            f.text(),
                            lines,
                            insertion
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_committed_text_never_exceeds_limits() {
    check_typing_stays_within_limits(field);
}

#[test]
fn test_committed_text_never_exceeds_limits_with_soft_wrap() {
    for columns in [1, 3, 6] {
        check_typing_stays_within_limits(|text, policy| {
            EditableText::new(text, policy, MonospaceWrap::new(columns))
        });
    }
}

#[test]
fn test_external_assign_never_exceeds_limits() {
    for trim in ALL_TRIM_MODES {
        let policy = StylePolicy::default().trim(trim).limit_count_and_line(4, 2);
        for buffer in ["", "ab", "a\nb"] {
            for value in SAMPLES.iter().chain(INSERTIONS.iter()) {
                let decision = assign(buffer, value, policy);
                let text = committed(buffer, &decision);
                assert!(normalized_count(text, trim) <= 4, "{:?}", text);
                assert!(HardLineBreaks.visual_line_count(text) <= 2, "{:?}", text);
            }
        }
    }
}

#[test]
fn test_reconciliation_is_deterministic() {
    for mode in ALL_BREAK_MODES {
        let policy = StylePolicy::default().input_break(mode).limit_count(6);
        for buffer in SAMPLES {
            for value in INSERTIONS {
                assert_eq!(assign(buffer, value, policy), assign(buffer, value, policy));
            }
        }
    }
}

#[test]
fn test_rejection_leaves_buffer_untouched() {
    let policy = StylePolicy::single_word().limit_count(4);
    let mut f = field("abcd", policy);
    for insertion in INSERTIONS {
        let decision = f.type_text(insertion);
        if decision.is_reject() {
            assert_eq!(f.text(), "abcd");
            assert_eq!(f.bound_value(), "abcd");
        }
    }
    assert!(live("abcd", EditProposal::insert(4, "x"), policy).is_reject());
}
