// File: src/rules.rs
// Purpose: Field rules - pure checks from a value to pass or a FieldError

use crate::error::FieldError;
use crate::field::Field;
use crate::state::FormState;
use once_cell::sync::Lazy;
use regex::Regex;

// Digit classes are spelled [0-9]; regex's \d is Unicode-aware.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static PINCODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$").unwrap()
});

const PASSWORD_MIN_CHARS: usize = 8;

/// Exactly 10 ASCII digits
pub fn check_phone_number(value: &str) -> Result<(), FieldError> {
    if PHONE_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidPhoneNumber)
    }
}

/// Optional field: empty passes, anything else must be a phone number
pub fn check_alternate_phone_number(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Ok(());
    }
    check_phone_number(value)
}

/// local@domain.tld with a 2-4 letter TLD
pub fn check_email(value: &str) -> Result<(), FieldError> {
    if EMAIL_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// Exactly 6 ASCII digits
pub fn check_pincode(value: &str) -> Result<(), FieldError> {
    if PINCODE_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidPincode)
    }
}

/// At least 8 characters with a lowercase letter, an uppercase letter and a digit.
///
/// Length is measured in `char`s (Unicode scalar values), not UTF-16 code
/// units, so an astral-plane symbol counts once.
///
/// `regex` has no look-ahead, so each class is checked directly rather than
/// through one pattern.
pub fn check_password(value: &str) -> Result<(), FieldError> {
    let long_enough = value.chars().count() >= PASSWORD_MIN_CHARS;
    let has_lowercase = value.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_lowercase && has_uppercase && has_digit {
        Ok(())
    } else {
        Err(FieldError::WeakPassword)
    }
}

/// Confirmation must equal the password exactly (independent of password strength)
pub fn check_password_confirmation(password: &str, confirmation: &str) -> Result<(), FieldError> {
    if password == confirmation {
        Ok(())
    } else {
        Err(FieldError::PasswordMismatch)
    }
}

/// Submit-time check: blank after trimming is missing
pub fn check_required(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

/// Run the inline rule for `field` against the current form values.
///
/// Fields without an inline rule always pass; they are only checked for
/// presence at submit time.
pub fn inline_check(field: Field, form: &FormState) -> Result<(), FieldError> {
    let value = form.get(field);
    match field {
        Field::ConfirmPassword => check_password_confirmation(&form.password, value),
        Field::PhoneNumber => check_phone_number(value),
        Field::AlternatePhoneNumber => check_alternate_phone_number(value),
        Field::Email => check_email(value),
        Field::Pincode => check_pincode(value),
        Field::Password => check_password(value),
        Field::Name
        | Field::StreetAddress
        | Field::City
        | Field::State
        | Field::Dob
        | Field::CompanyName
        | Field::IdCardNumber => Ok(()),
    }
}
