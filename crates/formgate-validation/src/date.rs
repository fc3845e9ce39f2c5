//! Calendar-date validation

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Parses a strict `YYYY-MM-DD` date.
///
/// The shape is checked up front; chrono alone would accept unpadded parts.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE_REGEX.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Inclusive at both bounds
pub fn is_within_window(date: NaiveDate, min: NaiveDate, max: NaiveDate) -> bool {
    date >= min && date <= max
}
