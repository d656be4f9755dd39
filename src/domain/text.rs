//! Text predicates

use validator::ValidateEmail;

/// Check that a string has no uppercase characters
pub fn is_lower(s: &str) -> bool {
    s.to_lowercase() == s
}

/// Check that a string is a bare, lowercase email address
///
/// Display-name forms such as `Pat <pat@example.com>` are rejected.
pub fn is_valid_email(email: &str) -> bool {
    is_lower(email) && email.validate_email()
}
