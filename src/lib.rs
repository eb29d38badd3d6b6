//! textgate - constraint and reconciliation engine for text input fields
//!
//! This crate decides, for every proposed change to a text field, whether the
//! change is accepted, truncated, or rejected, so that the committed text always
//! honors the field's input-break mode and its count and line limits.

pub mod config;
pub mod config_paths;
pub mod editable;
pub mod tracing;

// Re-export commonly used types
pub use config::{ConfiguredOracle, EngineConfig};
pub use editable::{
    Decision, DelegateMode, EditEvent, EditProposal, EditableText, InputBreakMode, LineOracle,
    StylePolicy, TrimMode,
};
