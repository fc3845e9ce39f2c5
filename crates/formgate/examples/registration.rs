//! Example: driving the registration-form engine from an in-memory store
//!
//! Stands in for the presentation layer: field values live in a HashMap,
//! requirement hints and the submit button print their state changes.
//!
//! Run: cargo run --example registration

use std::collections::{HashMap, HashSet};

use formgate::{
    registration_rules, ChoiceControl, FieldSource, Form, FormEvent, HintId, HintSink,
    HintState, SubmitControl, SubmitMode,
};

struct Store {
    values: HashMap<String, String>,
    required: HashSet<String>,
}

impl Store {
    fn new(required: &[&str]) -> Self {
        Self {
            values: HashMap::new(),
            required: required.iter().map(|f| f.to_string()).collect(),
        }
    }

    fn set(&mut self, field: &str, value: &str) {
        self.values.insert(field.to_string(), value.to_string());
    }
}

impl FieldSource for Store {
    fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    fn is_required(&self, field: &str) -> bool {
        self.required.contains(field)
    }
}

/// Prints every hint transition as the rules are re-evaluated
#[derive(Default)]
struct ConsoleHints {
    states: HashMap<HintId, HintState>,
}

impl HintSink for ConsoleHints {
    fn set_state(&mut self, hint: &HintId, state: HintState) {
        if self.states.insert(hint.clone(), state) != Some(state) {
            println!("  hint {}#{} -> {:?}", hint.field, hint.slot, state);
        }
    }
}

#[derive(Default)]
struct ConsoleButton {
    label: String,
}

impl SubmitControl for ConsoleButton {
    fn set_enabled(&mut self, _enabled: bool) {}

    fn set_label(&mut self, label: &str) {
        if self.label != label {
            println!("  submit button: {label:?}");
            self.label = label.to_string();
        }
    }

    fn set_mode(&mut self, _mode: SubmitMode) {}
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let form = Form::new(registration_rules(), vec![ChoiceControl::radio("gender")]);
    let mut store = Store::new(&[
        "fname", "lname", "dob", "ssn", "email", "phone", "user_id", "password",
        "password_repeat", "addr1", "city", "state", "zip", "gender",
    ]);
    let mut hints = ConsoleHints::default();
    let mut button = ConsoleButton::default();

    println!("page load:");
    form.init_gate(&mut button);
    form.handle_event(&FormEvent::Ready, &store, &mut hints, &mut button);

    println!("\nfilling the form (with one typo):");
    for (field, value) in [
        ("fname", "Jane"),
        ("lname", "O'Doe"),
        ("dob", "1990-06-15"),
        ("ssn", "123-45-6789"),
        ("email", "Jane.Doe@example.com"), // uppercase, will be flagged
        ("phone", "713-555-0142"),
        ("user_id", "jane_doe"),
        ("password", "Secret123"),
        ("password_repeat", "Secret123"),
        ("addr1", "123 Main St"),
        ("city", "Houston"),
        ("state", "TX"),
        ("zip", "77001"),
        ("gender", "f"),
    ] {
        store.set(field, value);
        form.handle_event(
            &FormEvent::ValueChanged(field.to_string()),
            &store,
            &mut hints,
            &mut button,
        );
    }

    println!("\nsubmission attempt with the typo still in place:");
    let outcome = form
        .handle_event(&FormEvent::SubmitAttempt, &store, &mut hints, &mut button)
        .unwrap();
    println!("  outcome: {outcome:?}");

    println!("\nfixing the email and retrying:");
    store.set("email", "jane.doe@example.com");
    form.handle_event(
        &FormEvent::ValueChanged("email".to_string()),
        &store,
        &mut hints,
        &mut button,
    );
    let outcome = form
        .handle_event(&FormEvent::SubmitAttempt, &store, &mut hints, &mut button)
        .unwrap();
    println!("  outcome: {outcome:?}");
}
