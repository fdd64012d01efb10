use crate::profile::{ProfileField, ProfileForm};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "Required field";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";
pub const INVALID_PHONE_MESSAGE: &str = "Invalid phone number";

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

/// Per-field validation failures, keyed in screen order. Empty means the
/// form passed the gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ProfileField, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn message(&self, field: ProfileField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: ProfileField, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Validates a form for submission. Pure: no state, no I/O. Runs once per
/// submit attempt, never per keystroke.
///
/// Required fields fail when empty or whitespace-only. Email and phone are
/// optional, but when present the email must look like `local@domain.tld`
/// and the phone must be exactly 10 digits.
pub fn validate(form: &ProfileForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for field in ProfileField::ALL {
        if field.is_required() && form.field(field).trim().is_empty() {
            errors.insert(field, REQUIRED_MESSAGE);
        }
    }

    if !form.email.is_empty() && !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(ProfileField::Email, INVALID_EMAIL_MESSAGE);
    }

    let phone = &form.phone_number;
    if !phone.is_empty() && !(phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())) {
        errors.insert(ProfileField::PhoneNumber, INVALID_PHONE_MESSAGE);
    }

    errors
}
