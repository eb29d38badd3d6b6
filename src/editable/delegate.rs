//! Host delegate modes.
//!
//! Whether a host routes edits through the engine at all is a host decision,
//! not an engine one. [`DelegateMode`] captures the three ways a field can be
//! wired: bypassed, fully automatic, or with host callbacks in the loop.

use std::fmt;

use super::buffer::{BufferSnapshot, EditProposal};

/// Callbacks a host can install on a field.
///
/// `should_change` runs before the engine and can veto a live edit. The other
/// callbacks are observational and fire only after a committed change; a value
/// identical to the last one delivered is not delivered again.
pub trait EditHooks {
    fn should_change(&mut self, _buffer: &BufferSnapshot<'_>, _proposal: &EditProposal) -> bool {
        true
    }

    fn did_change(&mut self, _text: &str) {}

    fn count_changed(&mut self, _count: usize) {}

    fn line_count_changed(&mut self, _lines: usize) {}
}

/// How a field routes edits.
#[derive(Default)]
pub enum DelegateMode {
    /// Engine bypassed; proposals and assignments are applied verbatim
    Disabled,
    /// Every event goes through the engine
    #[default]
    Automatic,
    /// Host hooks veto and observe; the engine still runs on allowed edits
    Hosted(Box<dyn EditHooks>),
}

impl DelegateMode {
    pub fn hosted(hooks: impl EditHooks + 'static) -> Self {
        Self::Hosted(Box::new(hooks))
    }

    /// Check if edits are evaluated by the engine
    pub fn runs_engine(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    pub fn is_hosted(&self) -> bool {
        matches!(self, Self::Hosted(_))
    }

    pub fn hooks_mut(&mut self) -> Option<&mut dyn EditHooks> {
        match self {
            Self::Hosted(hooks) => Some(hooks.as_mut()),
            _ => None,
        }
    }
}

impl fmt::Debug for DelegateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "Disabled"),
            Self::Automatic => write!(f, "Automatic"),
            Self::Hosted(_) => write!(f, "Hosted(..)"),
        }
    }
}
