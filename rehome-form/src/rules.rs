//! Per-field validation rules for the adoption-intake form.
//!
//! Each rule is a pure, total function from a raw input string to a
//! verdict: the empty string when the value is acceptable, otherwise a
//! fixed error message for the first violated check. Callers display
//! the message next to the offending field; an empty verdict means
//! there is nothing to show.

use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

// Unicode alphabetic, so "Noël" passes but digits and punctuation fail.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Alphabetic}+$").expect("invalid name pattern"));

// Optional leading '+', then digits/spaces/hyphens/parentheses only,
// opening with a digit or '(' and ending with a digit, 7 to 20
// characters after the '+'.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9(][0-9 ()-]{5,18}[0-9]$").expect("invalid phone pattern")
});

/// Validate a first name or surname.
pub fn validate_name(value: &str) -> &'static str {
    if value.is_empty() {
        "name can't be blank"
    } else if !NAME_PATTERN.is_match(value) {
        "invalid name"
    } else {
        ""
    }
}

/// Validate a phone number against a generic international format.
pub fn validate_phone(value: &str) -> &'static str {
    if value.is_empty() {
        "phone number can't be blank"
    } else if !PHONE_PATTERN.is_match(value) {
        "invalid phone number"
    } else {
        ""
    }
}

/// Validate a postal address. Only the empty string is rejected.
pub fn validate_address(value: &str) -> &'static str {
    if value.is_empty() { "address can't be blank" } else { "" }
}

/// Validate an email address.
pub fn validate_email(value: &str) -> &'static str {
    if value.is_empty() {
        "email can't be blank"
    } else if !is_email(value) {
        "invalid email"
    } else {
        ""
    }
}

// Grammar via the email_address crate, tightened to require a dotted
// domain so bare hosts like "a@b" are rejected.
fn is_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
        && value
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'))
}

/// Validate a password.
///
/// The checks run in a fixed order and only the first violation is
/// reported: length, then digit, then uppercase, then lowercase.
pub fn validate_password(value: &str) -> &'static str {
    if value.chars().count() < MIN_PASSWORD_CHARS {
        "at least 6 characters"
    } else if !value.chars().any(|c| c.is_ascii_digit()) {
        "must include number"
    } else if !value.chars().any(|c| c.is_ascii_uppercase()) {
        "must include uppercase"
    } else if !value.chars().any(|c| c.is_ascii_lowercase()) {
        "must include lowercase"
    } else {
        ""
    }
}
