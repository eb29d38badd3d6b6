//! Message types for the reconciliation engine.

use super::buffer::{EditProposal, EditRange};

/// A discrete change request from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// Proposal produced by direct typing, paste or deletion
    LiveEdit(EditProposal),
    /// The bound value was set by something other than typing
    ExternalAssign(String),
}

impl EditEvent {
    /// Typed insertion at a caret
    pub fn typed(at: usize, text: impl Into<String>) -> Self {
        Self::LiveEdit(EditProposal::insert(at, text))
    }

    /// Typed replacement of a range (selection overwrite, paste over selection)
    pub fn replaced(range: impl Into<EditRange>, text: impl Into<String>) -> Self {
        Self::LiveEdit(EditProposal::replace(range, text))
    }

    /// Removal of a range (backspace, cut)
    pub fn deleted(range: impl Into<EditRange>) -> Self {
        Self::LiveEdit(EditProposal::delete(range))
    }

    /// Programmatic assignment
    pub fn assigned(value: impl Into<String>) -> Self {
        Self::ExternalAssign(value.into())
    }
}
