// File: src/validator.rs
// Purpose: Per-field evaluation: run every rule, accumulate distinct messages

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::field::{FieldSource, HintSink, HintState};
use crate::rule::Rule;

/// Separator between accumulated invalidity messages
pub const MESSAGE_DELIMITER: &str = ". \n";

/// Outcome of one field evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

/// Evaluates one field's rule list against its live value.
///
/// Bound to its field for the whole page session; the value itself is never
/// owned, only read through the injected source at evaluation time.
pub struct FieldValidator {
    field: String,
    rules: Vec<Rule>,
}

impl FieldValidator {
    pub fn new(field: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            field: field.into(),
            rules,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs every rule against the field's current value.
    ///
    /// Invalidities are recomputed from scratch on each call; nothing carries
    /// over from earlier evaluations. Every rule runs even after failures, so
    /// the report always shows the complete picture.
    ///
    /// Rules with a hint paint their indicator: invalid when the rule fired,
    /// valid when it passed on a non-empty value, neutral otherwise (an empty
    /// optional field must not light up as valid).
    pub fn evaluate(&self, source: &dyn FieldSource, hints: &mut dyn HintSink) -> ValidationResult {
        let value = source.value(&self.field);
        let mut invalidities: Vec<String> = Vec::new();

        for rule in &self.rules {
            let violated = rule.is_violated(&value, source);

            if violated
                && rule.is_blocking()
                && !invalidities.iter().any(|m| m == rule.message())
            {
                invalidities.push(rule.message().to_string());
            }

            if let Some(hint) = rule.hint() {
                let state = if violated {
                    HintState::Invalid
                } else if !value.is_empty() {
                    HintState::Valid
                } else {
                    HintState::Neutral
                };
                hints.set_state(hint, state);
            }
        }

        // Rule messages win over the generic fallback; the fallback only
        // covers required-but-empty fields whose rules all stayed quiet
        let message = if invalidities.is_empty() {
            if value.is_empty() && source.is_required(&self.field) {
                format!("{} is required.", self.field)
            } else {
                String::new()
            }
        } else {
            invalidities.join(MESSAGE_DELIMITER)
        };

        let valid = message.is_empty();
        trace!(field = %self.field, valid, "field evaluated");

        ValidationResult { valid, message }
    }
}
