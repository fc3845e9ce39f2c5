// File: src/form.rs
// Purpose: Whole-form aggregation and the submission gate

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::field::{
    FieldSource, FormEvent, HintSink, SubmitControl, SubmitMode, INITIAL_LABEL, READY_LABEL,
};
use crate::registry::RuleRegistry;
use crate::validator::FieldValidator;

/// Notice surfaced to the user when a submission attempt is cancelled
pub const REJECTION_NOTICE: &str = "Please correct all errors before submitting.";

/// Kinds of externally-governed choice controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    Radio,
    Select,
}

/// A required-but-unruled control the aggregator checks directly.
///
/// Choice controls only ever fail one way (nothing chosen), so they skip the
/// rule-list machinery entirely.
#[derive(Debug, Clone)]
pub struct ChoiceControl {
    pub name: String,
    pub kind: ChoiceKind,
}

impl ChoiceControl {
    pub fn radio(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ChoiceKind::Radio,
        }
    }

    pub fn select(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ChoiceKind::Select,
        }
    }
}

/// Whole-form verdict, recomputed from scratch on every query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAssessment {
    pub all_valid: bool,
    pub error_count: usize,
}

/// Result of an explicit submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected {
        error_count: usize,
        notice: String,
    },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// The whole registration form: one validator per registered field plus the
/// externally-governed choice controls.
///
/// The form holds no verdict state of its own; every assessment reads the
/// live field values and recomputes from scratch.
pub struct Form {
    validators: Vec<FieldValidator>,
    choices: Vec<ChoiceControl>,
}

impl Form {
    /// Builds one validator per registered field. Fields without rules are
    /// covered by the choice-control checks or the generic required policy.
    pub fn new(registry: RuleRegistry, choices: Vec<ChoiceControl>) -> Self {
        let validators = registry
            .into_inner()
            .into_iter()
            .map(|(field, rules)| FieldValidator::new(field, rules))
            .collect();
        Self { validators, choices }
    }

    pub fn validators(&self) -> &[FieldValidator] {
        &self.validators
    }

    pub fn choices(&self) -> &[ChoiceControl] {
        &self.choices
    }

    /// Puts the gate into its pre-assessment state
    pub fn init_gate(&self, submit: &mut dyn SubmitControl) {
        submit.set_enabled(false);
        submit.set_label(INITIAL_LABEL);
        submit.set_mode(SubmitMode::Suppressed);
    }

    /// Evaluates every field validator and required choice control, counting
    /// failures. Never short-circuits: every field is always evaluated so the
    /// user sees the complete picture.
    pub fn assess(&self, source: &dyn FieldSource, hints: &mut dyn HintSink) -> FormAssessment {
        let mut error_count = 0;

        for validator in &self.validators {
            let result = validator.evaluate(source, hints);
            if !result.valid {
                error_count += 1;
            }
        }

        for choice in &self.choices {
            if !source.is_required(&choice.name) {
                continue;
            }
            let satisfied = match choice.kind {
                ChoiceKind::Radio => source.group_has_selection(&choice.name),
                ChoiceKind::Select => !source.value(&choice.name).is_empty(),
            };
            if !satisfied {
                error_count += 1;
            }
        }

        debug!(error_count, "form assessed");
        FormAssessment {
            all_valid: error_count == 0,
            error_count,
        }
    }

    /// Re-assesses and updates the submit control to match
    pub fn refresh_gate(
        &self,
        source: &dyn FieldSource,
        hints: &mut dyn HintSink,
        submit: &mut dyn SubmitControl,
    ) -> FormAssessment {
        let assessment = self.assess(source, hints);

        if assessment.all_valid {
            submit.set_enabled(true);
            submit.set_label(READY_LABEL);
            submit.set_mode(SubmitMode::Enabled);
        } else {
            submit.set_enabled(false);
            submit.set_label(&format!("Fix {} Errors", assessment.error_count));
            submit.set_mode(SubmitMode::Suppressed);
        }

        assessment
    }

    /// Final authoritative check on an explicit submission attempt.
    ///
    /// Runs unconditionally, regardless of the displayed gate state; any
    /// failure cancels the submission and re-syncs the gate.
    pub fn submit(
        &self,
        source: &dyn FieldSource,
        hints: &mut dyn HintSink,
        submit: &mut dyn SubmitControl,
    ) -> SubmitOutcome {
        let assessment = self.assess(source, hints);

        if assessment.all_valid {
            info!("form submission accepted");
            return SubmitOutcome::Accepted;
        }

        info!(error_count = assessment.error_count, "form submission rejected");
        submit.set_enabled(false);
        submit.set_label(&format!("Fix {} Errors", assessment.error_count));
        submit.set_mode(SubmitMode::Suppressed);

        SubmitOutcome::Rejected {
            error_count: assessment.error_count,
            notice: REJECTION_NOTICE.to_string(),
        }
    }

    /// Dispatches one interaction event.
    ///
    /// Value changes, focus loss, and the page-ready check all refresh the
    /// gate; only an explicit submission attempt produces an outcome.
    pub fn handle_event(
        &self,
        event: &FormEvent,
        source: &dyn FieldSource,
        hints: &mut dyn HintSink,
        submit: &mut dyn SubmitControl,
    ) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Ready | FormEvent::ValueChanged(_) | FormEvent::FocusLost(_) => {
                self.refresh_gate(source, hints, submit);
                None
            }
            FormEvent::SubmitAttempt => Some(self.submit(source, hints, submit)),
        }
    }
}
