// Integration tests for the full registration-form rule catalog

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;

use formgate::{
    registration_rules, ChoiceControl, FieldSource, FieldValidator, Form, FormEvent, HintId,
    HintSink, HintState, SubmitControl, SubmitMode, SubmitOutcome, MESSAGE_DELIMITER,
    READY_LABEL, REJECTION_NOTICE,
};

#[derive(Default, Clone)]
struct Store {
    values: HashMap<String, String>,
    required: Vec<String>,
}

impl Store {
    fn set(&mut self, field: &str, value: &str) {
        self.values.insert(field.to_string(), value.to_string());
    }
}

impl FieldSource for Store {
    fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|f| f == field)
    }
}

#[derive(Default)]
struct HintLog {
    states: HashMap<HintId, HintState>,
}

impl HintLog {
    fn state(&self, field: &str, slot: usize) -> Option<HintState> {
        self.states.get(&HintId::new(field, slot)).copied()
    }
}

impl HintSink for HintLog {
    fn set_state(&mut self, hint: &HintId, state: HintState) {
        self.states.insert(hint.clone(), state);
    }
}

#[derive(Default)]
struct Button {
    enabled: bool,
    label: String,
    mode: Option<SubmitMode>,
}

impl SubmitControl for Button {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn set_mode(&mut self, mode: SubmitMode) {
        self.mode = Some(mode);
    }
}

fn registration_form() -> Form {
    Form::new(registration_rules(), vec![ChoiceControl::radio("gender")])
}

/// A store holding a completely valid registration
fn complete_store() -> Store {
    let mut store = Store {
        values: HashMap::new(),
        required: [
            "fname", "lname", "dob", "ssn", "email", "phone", "user_id", "password",
            "password_repeat", "addr1", "city", "state", "zip", "gender",
        ]
        .iter()
        .map(|f| f.to_string())
        .collect(),
    };
    store.set("fname", "Jane");
    store.set("mname", "");
    store.set("lname", "O'Doe");
    store.set("dob", "1990-06-15");
    store.set("ssn", "123-45-6789");
    store.set("email", "jane.doe@example.com");
    store.set("phone", "713-555-0142");
    store.set("user_id", "jane_doe");
    store.set("password", "Secret123");
    store.set("password_repeat", "Secret123");
    store.set("addr1", "123 Main St");
    store.set("addr2", "");
    store.set("city", "Houston");
    store.set("state", "TX");
    store.set("zip", "77001");
    store.set("gender", "f");
    store
}

fn validator_for<'a>(form: &'a Form, field: &str) -> &'a FieldValidator {
    form.validators()
        .iter()
        .find(|v| v.field() == field)
        .unwrap_or_else(|| panic!("no validator for {field}"))
}

#[test]
fn complete_registration_passes() {
    let form = registration_form();
    let store = complete_store();
    let mut button = Button::default();

    let assessment = form.refresh_gate(&store, &mut HintLog::default(), &mut button);
    assert!(assessment.all_valid);
    assert_eq!(assessment.error_count, 0);
    assert!(button.enabled);
    assert_eq!(button.label, READY_LABEL);
    assert_eq!(button.mode, Some(SubmitMode::Enabled));
}

#[test]
fn untouched_registration_counts_every_failing_field() {
    let form = registration_form();
    let store = Store {
        values: HashMap::new(),
        required: complete_store().required,
    };
    let mut button = Button::default();

    // 13 ruled fields fail on empty input (mname and addr2 are optional),
    // plus the unselected gender radio group
    let assessment = form.refresh_gate(&store, &mut HintLog::default(), &mut button);
    assert!(!assessment.all_valid);
    assert_eq!(assessment.error_count, 14);
    assert_eq!(button.label, "Fix 14 Errors");
    assert_eq!(button.mode, Some(SubmitMode::Suppressed));
}

#[test]
fn assessment_is_idempotent() {
    let form = registration_form();
    let mut store = complete_store();
    store.set("zip", "77");

    let first = form.assess(&store, &mut HintLog::default());
    let second = form.assess(&store, &mut HintLog::default());
    assert_eq!(first, second);
}

#[rstest]
#[case("12345", true)]
#[case("1234", false)]
#[case("123456", false)]
#[case("1234a", false)]
fn zip_shapes(#[case] value: &str, #[case] valid: bool) {
    let form = registration_form();
    let mut store = complete_store();
    store.set("zip", value);

    let result = validator_for(&form, "zip").evaluate(&store, &mut HintLog::default());
    assert_eq!(result.valid, valid, "zip {value:?}");
}

#[rstest]
#[case("1905-01-01", true)]
#[case("1904-12-31", false)]
#[case("2025-10-16", true)]
#[case("2025-10-17", false)]
#[case("1990-06-15", true)]
#[case("06/15/1990", false)]
fn date_of_birth_window(#[case] value: &str, #[case] valid: bool) {
    let form = registration_form();
    let mut store = complete_store();
    store.set("dob", value);

    let result = validator_for(&form, "dob").evaluate(&store, &mut HintLog::default());
    assert_eq!(result.valid, valid, "dob {value:?}");
}

#[test]
fn password_confirmation_compares_live_values() {
    let form = registration_form();
    let mut store = complete_store();

    let confirm = validator_for(&form, "password_repeat");
    let result = confirm.evaluate(&store, &mut HintLog::default());
    assert!(result.valid);

    store.set("password_repeat", "Secret124");
    let result = confirm.evaluate(&store, &mut HintLog::default());
    assert!(!result.valid);
    assert_eq!(result.message, "Passwords must equal each other.");
}

#[test]
fn password_must_not_equal_user_id() {
    let form = registration_form();
    let mut store = complete_store();
    store.set("user_id", "Secret123");
    store.set("password", "Secret123");
    store.set("password_repeat", "Secret123");

    let result = validator_for(&form, "password").evaluate(&store, &mut HintLog::default());
    assert!(!result.valid);
    assert_eq!(result.message, "Password cannot equal your User ID.");
}

#[test]
fn password_reports_every_missing_class_at_once() {
    let form = registration_form();
    let mut store = complete_store();
    store.set("password", "abc");

    let result = validator_for(&form, "password").evaluate(&store, &mut HintLog::default());
    assert!(!result.valid);
    assert_eq!(
        result.message,
        [
            "Password must be at least 8 characters long.",
            "Must contain at least 1 digit (number).",
            "Must contain at least 1 uppercase letter.",
        ]
        .join(MESSAGE_DELIMITER)
    );
}

#[test]
fn email_must_be_lowercase() {
    let form = registration_form();
    let mut store = complete_store();
    store.set("email", "Jane.Doe@example.com");

    let result = validator_for(&form, "email").evaluate(&store, &mut HintLog::default());
    assert!(!result.valid);
    assert_eq!(result.message, "Email address must be lowercase.");
}

#[test]
fn ssn_accepts_both_forms_and_flags_the_hyphen_hint() {
    let form = registration_form();
    let mut store = complete_store();
    let ssn = validator_for(&form, "ssn");

    let mut hints = HintLog::default();
    let result = ssn.evaluate(&store, &mut hints);
    assert!(result.valid);
    assert_eq!(hints.state("ssn", 1), Some(HintState::Valid));
    assert_eq!(hints.state("ssn", 2), Some(HintState::Invalid));

    store.set("ssn", "123456789");
    let mut hints = HintLog::default();
    let result = ssn.evaluate(&store, &mut hints);
    assert!(result.valid);
    assert_eq!(hints.state("ssn", 2), Some(HintState::Valid));
}

#[rstest]
#[case("", true)]
#[case("Q", true)]
#[case("QQ", false)]
#[case("3", false)]
fn middle_initial_is_optional(#[case] value: &str, #[case] valid: bool) {
    let form = registration_form();
    let mut store = complete_store();
    store.set("mname", value);

    let result = validator_for(&form, "mname").evaluate(&store, &mut HintLog::default());
    assert_eq!(result.valid, valid, "mname {value:?}");
}

#[rstest]
#[case("", true)]
#[case("A", false)]
#[case("Apt 4B", true)]
fn address_line_two_is_optional(#[case] value: &str, #[case] valid: bool) {
    let form = registration_form();
    let mut store = complete_store();
    store.set("addr2", value);

    let result = validator_for(&form, "addr2").evaluate(&store, &mut HintLog::default());
    assert_eq!(result.valid, valid, "addr2 {value:?}");
}

#[rstest]
#[case("jane_doe-42", true)]
#[case("jane", false)]
#[case("4jane", false)]
#[case("jane doe", false)]
fn user_id_rules(#[case] value: &str, #[case] valid: bool) {
    let form = registration_form();
    let mut store = complete_store();
    store.set("user_id", value);

    let result = validator_for(&form, "user_id").evaluate(&store, &mut HintLog::default());
    assert_eq!(result.valid, valid, "user_id {value:?}");
}

#[test]
fn empty_name_paints_charset_hint_neutral() {
    let form = registration_form();
    let mut store = complete_store();
    store.set("fname", "");

    let mut hints = HintLog::default();
    validator_for(&form, "fname").evaluate(&store, &mut hints);
    // The length rule fired, the charset rule stayed quiet on empty input
    assert_eq!(hints.state("fname", 1), Some(HintState::Invalid));
    assert_eq!(hints.state("fname", 2), Some(HintState::Neutral));
}

#[test]
fn submission_gate_end_to_end() {
    let form = registration_form();
    let mut store = complete_store();
    store.set("phone", "7135550142");
    let mut button = Button::default();

    form.init_gate(&mut button);
    assert_eq!(button.label, "Fill Out Form");

    form.handle_event(
        &FormEvent::Ready,
        &store,
        &mut HintLog::default(),
        &mut button,
    );
    assert_eq!(button.label, "Fix 1 Errors");

    let outcome = form.handle_event(
        &FormEvent::SubmitAttempt,
        &store,
        &mut HintLog::default(),
        &mut button,
    );
    assert_eq!(
        outcome,
        Some(SubmitOutcome::Rejected {
            error_count: 1,
            notice: REJECTION_NOTICE.to_string(),
        })
    );

    store.set("phone", "713-555-0142");
    form.handle_event(
        &FormEvent::ValueChanged("phone".to_string()),
        &store,
        &mut HintLog::default(),
        &mut button,
    );
    assert!(button.enabled);
    assert_eq!(button.label, READY_LABEL);

    let outcome = form.handle_event(
        &FormEvent::SubmitAttempt,
        &store,
        &mut HintLog::default(),
        &mut button,
    );
    assert_eq!(outcome, Some(SubmitOutcome::Accepted));
}

#[test]
fn assessment_serializes_for_the_bridge() {
    let form = registration_form();
    let store = complete_store();

    let assessment = form.assess(&store, &mut HintLog::default());
    let json = serde_json::to_value(assessment).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "all_valid": true, "error_count": 0 })
    );
}
