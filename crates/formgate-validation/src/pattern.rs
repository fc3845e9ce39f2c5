//! Fixed-format field patterns (SSN-like identifier, phone, ZIP, user id)

use once_cell::sync::Lazy;
use regex::Regex;

static SSN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{9}$|^\d{3}-\d{2}-\d{4}$").unwrap()
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").unwrap());

static ZIP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").unwrap());

static USER_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Nine digits, plain or in the `###-##-####` grouped form
pub fn is_ssn(value: &str) -> bool {
    SSN_REGEX.is_match(value)
}

/// The hyphen-delimited grouped form is in use
pub fn is_hyphenated(value: &str) -> bool {
    value.contains('-')
}

/// `###-###-####` digit grouping
pub fn is_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Exactly 5 digits
pub fn is_zip(value: &str) -> bool {
    ZIP_REGEX.is_match(value)
}

/// Letters, digits, dash, and underscore only (non-empty, no spaces)
pub fn is_user_id_charset(value: &str) -> bool {
    USER_ID_REGEX.is_match(value)
}

pub fn starts_with_digit(value: &str) -> bool {
    value.chars().next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ssn() {
        assert!(is_ssn("123456789"));
        assert!(is_ssn("123-45-6789"));

        assert!(!is_ssn(""));
        assert!(!is_ssn("12345678"));
        assert!(!is_ssn("1234567890"));
        assert!(!is_ssn("123-456-789"));
        assert!(!is_ssn("12345678a"));
    }

    #[test]
    fn test_hyphenated() {
        assert!(is_hyphenated("123-45-6789"));
        assert!(!is_hyphenated("123456789"));
    }

    #[test]
    fn test_phone() {
        assert!(is_phone("713-555-0142"));

        assert!(!is_phone("7135550142"));
        assert!(!is_phone("713-555-014"));
        assert!(!is_phone("(713) 555-0142"));
        assert!(!is_phone(""));
    }

    #[test]
    fn test_zip() {
        assert!(is_zip("12345"));

        assert!(!is_zip("1234"));
        assert!(!is_zip("123456"));
        assert!(!is_zip("1234a"));
        assert!(!is_zip(""));
    }

    #[test]
    fn test_user_id_charset() {
        assert!(is_user_id_charset("jane_doe-42"));
        assert!(is_user_id_charset("abc"));

        assert!(!is_user_id_charset(""));
        assert!(!is_user_id_charset("jane doe"));
        assert!(!is_user_id_charset("jane.doe"));
    }

    #[test]
    fn test_starts_with_digit() {
        assert!(starts_with_digit("1abc"));
        assert!(!starts_with_digit("abc1"));
        assert!(!starts_with_digit(""));
    }
}
