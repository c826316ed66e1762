//! Email validation shared by the signup form and the signup function

use regex::Regex;

lazy_static::lazy_static! {
    /// Something, an `@`, something, a dot, something; no whitespace
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// `validator` adapter
pub(crate) fn validate_email(email: &str) -> Result<(), validator::ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_email"))
    }
}
