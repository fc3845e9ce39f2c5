// File: src/registry.rs
// Purpose: Per-field rule sets for the registration form

use std::collections::BTreeMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use formgate_validation as checks;

use crate::rule::Rule;

/// Earliest accepted date of birth
pub static DOB_MIN: Lazy<NaiveDate> = Lazy::new(|| NaiveDate::from_ymd_opt(1905, 1, 1).unwrap());

/// Latest accepted date of birth
pub static DOB_MAX: Lazy<NaiveDate> = Lazy::new(|| NaiveDate::from_ymd_opt(2025, 10, 16).unwrap());

fn is_valid_dob(value: &str) -> bool {
    checks::parse_iso_date(value)
        .map(|date| checks::is_within_window(date, *DOB_MIN, *DOB_MAX))
        .unwrap_or(false)
}

/// Ordered rule lists keyed by field id, read-only after construction.
///
/// Fields absent from the registry get no validator and fall to the generic
/// required policy handled at the form level.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: BTreeMap<String, Vec<Rule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, rules: Vec<Rule>) {
        self.rules.insert(field.into(), rules);
    }

    pub fn lookup(&self, field: &str) -> Option<&[Rule]> {
        self.rules.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn into_inner(self) -> BTreeMap<String, Vec<Rule>> {
        self.rules
    }
}

/// Rule sets for every validated field of the patient registration form
pub fn registration_rules() -> RuleRegistry {
    let mut registry = RuleRegistry::new();

    // --- Personal information ---
    registry.insert(
        "fname",
        vec![
            Rule::new(
                "First Name must be at least 1 and no more than 30 characters.",
                |v| checks::validate_length(v, 1, 30).is_err(),
            )
            .with_hint("fname", 1),
            Rule::new("Only letters, apostrophes, and dashes are allowed.", |v| {
                !checks::is_name_charset(v)
            })
            .with_hint("fname", 2),
        ],
    );

    registry.insert(
        "mname",
        vec![
            Rule::new("Middle Initial must be 1 character or left blank.", |v| {
                !v.is_empty() && v.len() > 1
            })
            .with_hint("mname", 1),
            Rule::new("Middle Initial must only contain letters if entered.", |v| {
                !v.is_empty() && !checks::is_single_letter(v)
            })
            .with_hint("mname", 2),
        ],
    );

    registry.insert(
        "lname",
        vec![
            Rule::new(
                "Last Name must be at least 1 and no more than 30 characters.",
                |v| checks::validate_length(v, 1, 30).is_err(),
            )
            .with_hint("lname", 1),
            Rule::new("Only letters, apostrophes, and dashes are allowed.", |v| {
                !checks::is_name_charset(v)
            })
            .with_hint("lname", 2),
        ],
    );

    registry.insert(
        "dob",
        vec![
            Rule::new("Date of Birth (YYYY-MM-DD) is required.", |v| v.is_empty()),
            Rule::new(
                "Date must not be after the enrollment cutoff or older than 120 years.",
                |v| !is_valid_dob(v),
            )
            .with_hint("dob", 2),
        ],
    );

    registry.insert(
        "ssn",
        vec![
            Rule::new("Social Security / ID is required.", |v| v.is_empty()),
            Rule::new("Must be 9 digits (formatted as ###-##-####).", |v| {
                !checks::is_ssn(v)
            })
            .with_hint("ssn", 1),
            // Drives the "formatted" requirement hint only; never blocks
            Rule::informational("Hyphen-delimited form in use.", checks::is_hyphenated)
                .with_hint("ssn", 2),
        ],
    );

    // --- Account information ---
    registry.insert(
        "email",
        vec![
            Rule::new("Email address is required.", |v| v.is_empty()),
            Rule::new("Must be in the format name@domain.tld.", |v| {
                !checks::is_email_shape(v)
            })
            .with_hint("email", 1),
            Rule::new("Email address must be lowercase.", |v| !checks::is_lowercase(v))
                .with_hint("email", 2),
        ],
    );

    registry.insert(
        "phone",
        vec![
            Rule::new("Phone number is required.", |v| v.is_empty()),
            Rule::new("Must be in the format 000-000-0000.", |v| !checks::is_phone(v))
                .with_hint("phone", 1),
        ],
    );

    registry.insert(
        "user_id",
        vec![
            Rule::new("User ID must be 5 to 20 characters.", |v| {
                checks::validate_length(v, 5, 20).is_err()
            })
            .with_hint("user_id", 1),
            Rule::new("User ID cannot start with a number.", checks::starts_with_digit)
                .with_hint("user_id", 2),
            Rule::new(
                "Only letters, numbers, dash, and underscore are allowed. No spaces.",
                |v| !checks::is_user_id_charset(v),
            )
            .with_hint("user_id", 3),
        ],
    );

    registry.insert(
        "password",
        vec![
            Rule::new("Password must be at least 8 characters long.", |v| {
                checks::validate_min_length(v, 8).is_err()
            })
            .with_hint("password", 1),
            Rule::new("Must contain at least 1 digit (number).", |v| {
                !checks::has_digit(v)
            })
            .with_hint("password", 2),
            Rule::new("Must contain at least 1 lowercase letter.", |v| {
                !checks::has_lowercase(v)
            })
            .with_hint("password", 3),
            Rule::new("Must contain at least 1 uppercase letter.", |v| {
                !checks::has_uppercase(v)
            })
            .with_hint("password", 4),
            Rule::cross_field("Password cannot equal your User ID.", |v, source| {
                !v.is_empty() && checks::equals(v, &source.value("user_id"))
            })
            .with_hint("password", 5),
        ],
    );

    registry.insert(
        "password_repeat",
        vec![
            Rule::new("Re-enter Password is required.", |v| v.is_empty()),
            Rule::cross_field("Passwords must equal each other.", |v, source| {
                !checks::equals(v, &source.value("password"))
            })
            .with_hint("password_repeat", 1),
        ],
    );

    // --- Address information ---
    registry.insert(
        "addr1",
        vec![Rule::new(
            "Address Line 1 is required and must be 2 to 30 characters.",
            |v| checks::validate_length(v, 2, 30).is_err(),
        )],
    );

    registry.insert(
        "addr2",
        vec![Rule::new(
            "If entered, Address Line 2 must be 2 to 30 characters.",
            |v| !v.is_empty() && checks::validate_length(v, 2, 30).is_err(),
        )],
    );

    registry.insert(
        "city",
        vec![Rule::new("City is required and must be 2 to 30 characters.", |v| {
            checks::validate_length(v, 2, 30).is_err()
        })],
    );

    registry.insert(
        "state",
        vec![Rule::new("State selection is required.", |v| v.is_empty())],
    );

    registry.insert(
        "zip",
        vec![
            Rule::new("Zip Code is required.", |v| v.is_empty()),
            Rule::new("Zip Code must be exactly 5 digits.", |v| !checks::is_zip(v)),
        ],
    );

    registry
}
