//! Constrained text editing.
//!
//! Every change to a constrained field is either a live edit (typing, paste,
//! deletion) or an external assignment of the bound value. Both are reduced to
//! a single [`Decision`] by the same pipeline:
//!
//! 1. input-break filtering truncates the insertion at the first forbidden
//!    cluster (newline, space, or a second consecutive space)
//! 2. line and count limits cut the insertion down to what still fits, with
//!    counts measured on the trim-normalized text
//!
//! # Architecture
//!
//! - [`Graphemes`] / [`BufferSnapshot`]: cluster-indexed views of a buffer
//! - [`EditProposal`]: replace a cluster range with new text
//! - [`StylePolicy`]: break mode, trim mode and limits of a field
//! - [`LineOracle`]: visual line measurement supplied by the host
//! - [`EditEvent`] / [`handle_event`]: the stateless engine entry point
//! - [`EditableText`]: a field that owns its buffer and bound value
//!
//! # Example
//!
//! ```
//! use textgate::editable::{EditableText, HardLineBreaks, StylePolicy, TrimMode};
//!
//! let policy = StylePolicy::default()
//!     .trim(TrimMode::BlankWithWhitespacesAndNewlines)
//!     .limit_count(5);
//! let mut field = EditableText::new("", policy, HardLineBreaks);
//!
//! field.type_text("a b c d e f");
//! assert_eq!(field.text(), "a b c");
//! ```

mod buffer;
mod classify;
mod constraints;
mod delegate;
mod input_break;
mod limits;
mod messages;
mod oracle;
mod reconcile;
mod state;
mod trim;

// Re-export main types
pub use buffer::{grapheme_len, BufferSnapshot, EditProposal, EditRange, Graphemes};
pub use classify::{char_class, is_newline, is_space, is_space_run, CharClass};
pub use constraints::{InputBreakMode, StylePolicy, TrimMode, UNBOUNDED};
pub use delegate::{DelegateMode, EditHooks};
pub use input_break::{filter_insertion, filter_standalone};
pub use limits::{evaluate_limits, truncate_to_limit_lines, LimitOutcome, LimitViolation};
pub use messages::EditEvent;
pub use oracle::{HardLineBreaks, LineOracle, MonospaceWrap};
pub use reconcile::{
    evaluate_external_assign, evaluate_live_edit, first_difference, handle_event, Decision, Phase,
};
pub use state::EditableText;
pub use trim::{normalize, normalized_count};
