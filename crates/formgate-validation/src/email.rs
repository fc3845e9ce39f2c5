//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z]{2,6}$").unwrap()
});

/// Validates `local@domain.tld` shape with a 2-6 letter TLD
pub fn is_email_shape(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// True when the value contains no uppercase letters.
///
/// Case sensitivity is a hard rule here: uppercase input is an error,
/// never normalized away.
pub fn is_lowercase(value: &str) -> bool {
    !value.chars().any(|c| c.is_uppercase())
}
