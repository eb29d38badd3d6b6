//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use textgate::editable::{
    evaluate_external_assign, evaluate_live_edit, BufferSnapshot, Decision, EditProposal,
    EditableText, HardLineBreaks, InputBreakMode, StylePolicy, TrimMode,
};

pub const ALL_BREAK_MODES: [InputBreakMode; 6] = [
    InputBreakMode::None,
    InputBreakMode::LineBreak,
    InputBreakMode::WhiteSpace,
    InputBreakMode::ContinuousWhiteSpace,
    InputBreakMode::LineWithWhiteSpace,
    InputBreakMode::LineWithContinuousWhiteSpace,
];

pub const ALL_TRIM_MODES: [TrimMode; 5] = [
    TrimMode::None,
    TrimMode::Whitespaces,
    TrimMode::WhitespacesAndNewlines,
    TrimMode::BlankWithWhitespaces,
    TrimMode::BlankWithWhitespacesAndNewlines,
];

/// Texts mixing spaces, tabs, newlines, CRLF and multi-codepoint clusters
pub const SAMPLES: [&str; 10] = [
    "",
    " ",
    "hello",
    "  padded  ",
    "a b  c",
    "line one\nline two",
    "\n\n trailing \t\n",
    "crlf\r\nline",
    "caf\u{0065}\u{0301} ok",
    "\u{1F469}\u{200D}\u{1F4BB} \u{1F1EF}\u{1F1F5}",
];

/// Evaluate a live edit against `buffer` with hard line breaks
pub fn live(buffer: &str, proposal: EditProposal, policy: StylePolicy) -> Decision {
    evaluate_live_edit(
        &BufferSnapshot::new(buffer),
        &proposal,
        &policy,
        &HardLineBreaks,
    )
}

/// Evaluate an external assignment against `buffer` with hard line breaks
pub fn assign(buffer: &str, value: &str, policy: StylePolicy) -> Decision {
    evaluate_external_assign(&BufferSnapshot::new(buffer), value, &policy, &HardLineBreaks)
}

/// Create a field with the caret at the end of `text`
pub fn field(text: &str, policy: StylePolicy) -> EditableText<HardLineBreaks> {
    EditableText::new(text, policy, HardLineBreaks)
}

/// Text the buffer holds after `decision` was applied to `buffer`
pub fn committed<'a>(buffer: &'a str, decision: &'a Decision) -> &'a str {
    decision.text().unwrap_or(buffer)
}
