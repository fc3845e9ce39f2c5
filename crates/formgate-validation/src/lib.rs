//! Formgate Validation Core
//!
//! Pure validation functions for registration-form fields. Nothing here knows
//! about forms, fields, or presentation; the formgate engine composes these
//! primitives into per-field rule lists.

pub mod date;
pub mod email;
pub mod password;
pub mod pattern;
pub mod string;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use password::*;
pub use pattern::*;
pub use string::*;
