//! EditableText - a host that owns a constrained buffer and its bound value.
//!
//! The engine itself is stateless. This type plays the part of the text widget
//! and its binding: it holds the authoritative buffer, an externally visible
//! copy of the text, the caret/selection, and routes every change through the
//! engine according to its [`DelegateMode`].

use super::buffer::{grapheme_len, BufferSnapshot, EditProposal, EditRange};
use super::constraints::StylePolicy;
use super::delegate::DelegateMode;
use super::messages::EditEvent;
use super::oracle::LineOracle;
use super::reconcile::{handle_event, Decision};
use super::trim::normalized_count;

/// A constrained text field.
///
/// Generic over the line oracle so hosts can plug in their own measurement.
#[derive(Debug)]
pub struct EditableText<O: LineOracle> {
    /// Authoritative buffer
    text: String,
    /// Copy exposed to application code; forced back to `text` on reject
    bound: String,
    /// Selected range; a caret when empty
    selection: EditRange,
    policy: StylePolicy,
    oracle: O,
    mode: DelegateMode,
    /// Last (count, lines) delivered to hooks
    reported: Option<(usize, usize)>,
}

impl<O: LineOracle> EditableText<O> {
    /// Create a field whose initial content is assigned through the engine.
    pub fn new(text: &str, policy: StylePolicy, oracle: O) -> Self {
        let mut field = Self {
            text: String::new(),
            bound: String::new(),
            selection: EditRange::default(),
            policy,
            oracle,
            mode: DelegateMode::Automatic,
            reported: None,
        };
        field.assign(text);
        field
    }

    /// Get the buffer text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the bound value
    pub fn bound_value(&self) -> &str {
        &self.bound
    }

    /// Caret position (end of the selection)
    pub fn cursor(&self) -> usize {
        self.selection.end()
    }

    pub fn selection(&self) -> EditRange {
        self.selection
    }

    pub fn policy(&self) -> &StylePolicy {
        &self.policy
    }

    /// Replace the policy. The buffer is not re-validated; the new rules apply
    /// from the next event on.
    pub fn set_policy(&mut self, policy: StylePolicy) {
        self.policy = policy;
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn delegate_mode(&self) -> &DelegateMode {
        &self.mode
    }

    pub fn set_delegate_mode(&mut self, mode: DelegateMode) {
        self.mode = mode;
        self.reported = None;
    }

    /// Normalized count of the buffer under the current trim mode
    pub fn normalized_count(&self) -> usize {
        normalized_count(&self.text, self.policy.trim_mode)
    }

    pub fn visual_line_count(&self) -> usize {
        self.oracle.visual_line_count(&self.text)
    }

    /// How many more normalized clusters the count limit allows
    pub fn remaining_count(&self) -> usize {
        self.policy
            .limit_count
            .saturating_sub(self.normalized_count())
    }

    /// Select a range (clamped to the buffer)
    pub fn select(&mut self, range: impl Into<EditRange>) {
        let range = range.into().clamp(grapheme_len(&self.text));
        self.selection = range.into();
    }

    /// Move the caret (collapses the selection)
    pub fn set_cursor(&mut self, offset: usize) {
        self.select(offset..offset);
    }

    /// Type `text` at the caret, replacing the selection
    pub fn type_text(&mut self, text: &str) -> Decision {
        self.apply(EditEvent::LiveEdit(EditProposal::new(self.selection, text)))
    }

    /// Delete the selection, or the cluster before the caret
    pub fn backspace(&mut self) -> Decision {
        let range = if self.selection.length > 0 {
            self.selection
        } else {
            let at = self.selection.location;
            EditRange::from(at.saturating_sub(1)..at)
        };
        self.apply(EditEvent::LiveEdit(EditProposal::delete(range)))
    }

    /// Application code sets the bound value
    pub fn assign(&mut self, value: &str) -> Decision {
        self.apply(EditEvent::ExternalAssign(value.to_string()))
    }

    /// Evaluate `event` and apply the decision to the buffer and bound value.
    pub fn apply(&mut self, event: EditEvent) -> Decision {
        let decision = {
            let snapshot = BufferSnapshot::new(&self.text);
            let vetoed = match (&mut self.mode, &event) {
                (DelegateMode::Hosted(hooks), EditEvent::LiveEdit(proposal)) => {
                    !hooks.should_change(&snapshot, proposal)
                }
                _ => false,
            };

            if vetoed {
                tracing::debug!("host vetoed live edit");
                Decision::Reject
            } else if !self.mode.runs_engine() {
                apply_verbatim(&snapshot, &event)
            } else {
                handle_event(&snapshot, &event, &self.policy, &self.oracle)
            }
        };
        self.commit(&decision);
        decision
    }

    fn commit(&mut self, decision: &Decision) {
        match decision {
            Decision::Accept { text, cursor } | Decision::Truncated { text, cursor } => {
                let changed = *text != self.text;
                self.text.clone_from(text);
                self.bound.clone_from(text);
                self.selection = EditRange::caret(*cursor);
                if changed {
                    self.notify();
                }
            }
            Decision::Reject => {
                // Keep the binding in sync with what is actually displayed
                self.bound.clone_from(&self.text);
            }
        }
    }

    fn notify(&mut self) {
        if !self.mode.is_hosted() {
            return;
        }
        let count = self.normalized_count();
        let lines = self.visual_line_count();
        let previous = self.reported.replace((count, lines));
        let Some(hooks) = self.mode.hooks_mut() else {
            return;
        };

        hooks.did_change(&self.text);
        if previous.map(|(c, _)| c) != Some(count) {
            hooks.count_changed(count);
        }
        if previous.map(|(_, l)| l) != Some(lines) {
            hooks.line_count_changed(lines);
        }
    }
}

/// Apply an event with no constraints at all
fn apply_verbatim(snapshot: &BufferSnapshot<'_>, event: &EditEvent) -> Decision {
    match event {
        EditEvent::LiveEdit(proposal) => {
            let (text, cursor) = snapshot.apply(proposal);
            Decision::Accept { text, cursor }
        }
        EditEvent::ExternalAssign(value) => Decision::Accept {
            text: value.clone(),
            cursor: grapheme_len(value),
        },
    }
}
