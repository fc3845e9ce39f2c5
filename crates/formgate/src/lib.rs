// Formgate - client-side field-validation engine with a submission gate
// Evaluates per-field rule sets, accumulates failure messages, and gates
// form submission on the whole-form verdict

pub mod field;
pub mod form;
pub mod registry;
pub mod rule;
pub mod validator;

// Re-export boundary contracts
pub use field::{
    FieldSource, FormEvent, HintId, HintSink, HintState, SubmitControl, SubmitMode,
    INITIAL_LABEL, READY_LABEL,
};

// Re-export the engine types
pub use form::{
    ChoiceControl, ChoiceKind, Form, FormAssessment, SubmitOutcome, REJECTION_NOTICE,
};
pub use registry::{registration_rules, RuleRegistry, DOB_MAX, DOB_MIN};
pub use rule::Rule;
pub use validator::{FieldValidator, ValidationResult, MESSAGE_DELIMITER};
