// File: src/rule.rs
// Purpose: Validation rules as plain data: predicate + message + optional hint

use std::fmt;

use crate::field::{FieldSource, HintId};

/// Predicate over a field's current value; `true` means the rule is violated.
///
/// The source gives cross-field rules live access to other fields, read at
/// evaluation time rather than from a snapshot.
pub type Predicate = Box<dyn Fn(&str, &dyn FieldSource) -> bool + Send + Sync>;

/// One independent validation rule.
///
/// Rules are immutable once built and never depend on each other's outcome;
/// every rule in a field's list runs on every evaluation.
pub struct Rule {
    predicate: Predicate,
    message: String,
    hint: Option<HintId>,
    blocking: bool,
}

impl Rule {
    /// Rule over the field's own value
    pub fn new<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(move |value, _| predicate(value)),
            message: message.into(),
            hint: None,
            blocking: true,
        }
    }

    /// Rule that may read other fields' current values through the source
    pub fn cross_field<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str, &dyn FieldSource) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
            hint: None,
            blocking: true,
        }
    }

    /// Rule that only drives its requirement indicator.
    ///
    /// When the predicate fires, the hint is painted but no invalidity is
    /// recorded and the field's verdict is unaffected.
    pub fn informational<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let mut rule = Rule::new(message, predicate);
        rule.blocking = false;
        rule
    }

    /// Attach the requirement indicator this rule drives
    pub fn with_hint(mut self, field: &str, slot: usize) -> Self {
        self.hint = Some(HintId::new(field, slot));
        self
    }

    /// Runs the predicate against the current value
    pub fn is_violated(&self, value: &str, source: &dyn FieldSource) -> bool {
        (self.predicate)(value, source)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hint(&self) -> Option<&HintId> {
        self.hint.as_ref()
    }

    /// Whether a violation counts against the field's verdict
    pub fn is_blocking(&self) -> bool {
        self.blocking
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .field("hint", &self.hint)
            .field("blocking", &self.blocking)
            .finish_non_exhaustive()
    }
}
