//! Reconciliation engine.
//!
//! Single entry point for every change to a constrained buffer. Live keystrokes
//! run through the input-break filter and then the limit evaluator. Externally
//! assigned values are diffed against the buffer, turned into one contiguous
//! proposal and replayed through the same pipeline, so text obeys the same
//! rules whether it was typed or set by application code.
//!
//! The engine holds no state between calls: each decision is a pure function
//! of the snapshot, the event, the policy and the line oracle.

use std::fmt;

use super::buffer::{BufferSnapshot, EditProposal, EditRange, Graphemes};
use super::constraints::StylePolicy;
use super::input_break::filter_insertion;
use super::limits::{evaluate_limits, LimitOutcome};
use super::messages::EditEvent;
use super::oracle::LineOracle;

/// Outcome of evaluating one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Commit `text`; the cursor goes to `cursor`
    Accept { text: String, cursor: usize },
    /// Only part of the proposed replacement survived
    Truncated { text: String, cursor: usize },
    /// Leave the buffer unchanged
    Reject,
}

impl Decision {
    /// Text to commit, None for a rejection
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Accept { text, .. } | Self::Truncated { text, .. } => Some(text),
            Self::Reject => None,
        }
    }

    /// Cursor after commit, None for a rejection
    pub fn cursor(&self) -> Option<usize> {
        match self {
            Self::Accept { cursor, .. } | Self::Truncated { cursor, .. } => Some(*cursor),
            Self::Reject => None,
        }
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, Self::Reject)
    }

    /// Accepted fully or partially
    pub fn is_commit(&self) -> bool {
        !self.is_reject()
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Accept { .. } => "accept",
            Self::Truncated { .. } => "truncated",
            Self::Reject => "reject",
        }
    }
}

/// Where the engine is while handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Diffing,
    Evaluating,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Diffing => write!(f, "diffing"),
            Self::Evaluating => write!(f, "evaluating"),
        }
    }
}

/// Dispatch an [`EditEvent`] to the matching entry point.
pub fn handle_event(
    buffer: &BufferSnapshot<'_>,
    event: &EditEvent,
    policy: &StylePolicy,
    oracle: &dyn LineOracle,
) -> Decision {
    let decision = match event {
        EditEvent::LiveEdit(proposal) => evaluate_live_edit(buffer, proposal, policy, oracle),
        EditEvent::ExternalAssign(value) => {
            evaluate_external_assign(buffer, value, policy, oracle)
        }
    };
    tracing::trace!(phase = %Phase::Idle, "event handled");
    decision
}

/// Evaluate a proposal that came from direct typing.
pub fn evaluate_live_edit(
    buffer: &BufferSnapshot<'_>,
    proposal: &EditProposal,
    policy: &StylePolicy,
    oracle: &dyn LineOracle,
) -> Decision {
    tracing::trace!(phase = %Phase::Evaluating, range = ?proposal.range, "live edit");

    let preceding = if policy.input_break_mode.needs_context() {
        buffer.char_before(proposal.range.location)
    } else {
        None
    };
    let filtered = filter_insertion(preceding, &proposal.replacement, policy.input_break_mode);

    // Break filtering only constrains insertions; deletions pass untouched.
    if filtered.is_empty() && !proposal.is_deletion() {
        tracing::debug!(
            mode = ?policy.input_break_mode,
            "input break rejected insertion"
        );
        return Decision::Reject;
    }

    let filter_truncated = filtered.len() < proposal.replacement.len();
    let filtered_proposal = proposal.with_replacement(filtered);
    let decision = match evaluate_limits(buffer, &filtered_proposal, policy, oracle) {
        LimitOutcome::Within { text, cursor } if filter_truncated => {
            Decision::Truncated { text, cursor }
        }
        LimitOutcome::Within { text, cursor } => Decision::Accept { text, cursor },
        LimitOutcome::Truncated { text, cursor, .. } => Decision::Truncated { text, cursor },
        LimitOutcome::Rejected(_) => Decision::Reject,
    };

    tracing::debug!(decision = decision.label(), "live edit evaluated");
    decision
}

/// Evaluate a value assigned from outside the typing path.
///
/// - An empty value always clears the buffer.
/// - A value identical to the buffer is a no-op accept.
/// - A value that differs from the very first cluster is a full replacement:
///   it skips input-break filtering and is only held to the limits.
/// - Anything else becomes the proposal "replace everything from the first
///   difference with the new tail" and goes through the live-edit pipeline.
pub fn evaluate_external_assign(
    buffer: &BufferSnapshot<'_>,
    new_value: &str,
    policy: &StylePolicy,
    oracle: &dyn LineOracle,
) -> Decision {
    if new_value.is_empty() {
        tracing::debug!("external assign cleared buffer");
        return Decision::Accept {
            text: String::new(),
            cursor: 0,
        };
    }

    tracing::trace!(phase = %Phase::Diffing, "external assign");
    let incoming = Graphemes::new(new_value);
    let diff = first_difference(buffer.graphemes(), &incoming);

    if diff == buffer.len() && diff == incoming.len() {
        return Decision::Accept {
            text: buffer.text().to_string(),
            cursor: buffer.len(),
        };
    }

    if diff == 0 {
        tracing::trace!(phase = %Phase::Evaluating, "full replacement");
        let empty = BufferSnapshot::new("");
        let proposal = EditProposal::insert(0, new_value);
        let decision = match evaluate_limits(&empty, &proposal, policy, oracle) {
            LimitOutcome::Within { text, cursor } => Decision::Accept { text, cursor },
            LimitOutcome::Truncated { text, cursor, .. } => Decision::Truncated { text, cursor },
            LimitOutcome::Rejected(_) => Decision::Reject,
        };
        tracing::debug!(decision = decision.label(), "full replacement evaluated");
        return decision;
    }

    let proposal = EditProposal::new(
        EditRange::new(diff, buffer.len() - diff),
        incoming.suffix_from(diff),
    );
    evaluate_live_edit(buffer, &proposal, policy, oracle)
}

/// First cluster index where `old` and `new` disagree.
///
/// When one is a prefix of the other this is the shorter length; for equal
/// inputs it is their common length.
pub fn first_difference(old: &Graphemes<'_>, new: &Graphemes<'_>) -> usize {
    let shorter = old.len().min(new.len());
    (0..shorter)
        .find(|&i| old.get(i) != new.get(i))
        .unwrap_or(shorter)
}
