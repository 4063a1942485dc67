//! Field checks run by the shell before anything is handed to the store.
//!
//! The store itself never validates; these functions take plain strings so they
//! can be reused by any front end.

use crate::error::{Result, ValidationError};
use crate::model::{Contact, ContactInput};
use once_cell::sync::Lazy;
use regex::Regex;

const PHONE_DIGITS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9+_.-]+@[a-zA-Z0-9.-]+$").expect("email regex must compile")
});

/// Exactly ten ASCII decimal digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks required fields, then phone, then email, and builds the record.
pub fn validate_input(input: &ContactInput) -> Result<Contact> {
    if input.name.is_empty() || input.phone.is_empty() {
        return Err(ValidationError::MissingField.into());
    }
    if !is_valid_phone(&input.phone) {
        return Err(ValidationError::InvalidPhone.into());
    }
    if !is_valid_email(&input.email) {
        return Err(ValidationError::InvalidEmail.into());
    }
    Ok(Contact::new(
        input.name.clone(),
        input.phone.clone(),
        input.email.clone(),
    ))
}
