// File: src/field.rs
// Purpose: Boundary contracts between the engine and the presentation layer

use serde::{Deserialize, Serialize};

/// Submit-control label before the first page-ready assessment
pub const INITIAL_LABEL: &str = "Fill Out Form";

/// Submit-control label when every check passes
pub const READY_LABEL: &str = "Submit";

/// Visual state of a per-requirement indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintState {
    /// No styling; the field is untouched or empty
    Neutral,
    Valid,
    Invalid,
}

/// Address of one requirement indicator: a field plus the 1-based slot in
/// that field's requirement list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HintId {
    pub field: String,
    pub slot: usize,
}

impl HintId {
    pub fn new(field: impl Into<String>, slot: usize) -> Self {
        Self {
            field: field.into(),
            slot,
        }
    }
}

/// Whether the submit control forwards or swallows a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitMode {
    Enabled,
    Suppressed,
}

/// Live read access to field values and metadata.
///
/// The engine never caches what it reads here; every evaluation reads the
/// current value fresh. This is also the cross-field read capability used by
/// rules such as password confirmation.
pub trait FieldSource {
    /// Current textual or selected value of a field, empty if unset
    fn value(&self, field: &str) -> String;

    /// Whether the field is marked required
    fn is_required(&self, field: &str) -> bool;

    /// Whether any member of a radio group is selected
    fn group_has_selection(&self, group: &str) -> bool {
        !self.value(group).is_empty()
    }
}

/// Receiver for requirement-indicator state changes.
///
/// The engine never creates or destroys indicators, it only toggles them.
pub trait HintSink {
    fn set_state(&mut self, hint: &HintId, state: HintState);
}

/// The submit control the gate drives
pub trait SubmitControl {
    fn set_enabled(&mut self, enabled: bool);
    fn set_label(&mut self, label: &str);
    fn set_mode(&mut self, mode: SubmitMode);
}

/// Interaction events the engine is invoked on; it never originates them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// One-time page-ready check
    Ready,
    ValueChanged(String),
    FocusLost(String),
    SubmitAttempt,
}
