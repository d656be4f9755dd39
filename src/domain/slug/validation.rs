//! Slug validation
//!
//! Two grammars are supported:
//! - strict: lowercase letters and digits, with `-` and `_` allowed only
//!   between them (suitable for URL and path components)
//! - relaxed: any mix of ASCII letters, digits, `-` and `_`

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Regex pattern for the relaxed grammar
static RELAXED_SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Errors that can occur during slug validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SlugValidationError {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name contains invalid character: '{0}'. Only letters, numbers, hyphens and underscores are allowed")]
    InvalidCharacter(char),

    #[error("Name must start and end with a lowercase letter or number")]
    InvalidBoundary,
}

fn is_strict_body_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'
}

fn is_strict_edge_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Validate a slug against the strict or relaxed grammar
pub fn validate_slug(name: &str, strict_format: bool) -> Result<(), SlugValidationError> {
    if name.is_empty() {
        return Err(SlugValidationError::Empty);
    }

    if strict_format {
        if let Some(c) = name.chars().find(|c| !is_strict_body_char(*c)) {
            return Err(SlugValidationError::InvalidCharacter(c));
        }

        let starts_ok = name.chars().next().is_some_and(is_strict_edge_char);
        let ends_ok = name.chars().next_back().is_some_and(is_strict_edge_char);
        if !starts_ok || !ends_ok {
            return Err(SlugValidationError::InvalidBoundary);
        }

        return Ok(());
    }

    if !RELAXED_SLUG_PATTERN.is_match(name) {
        let c = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
            .unwrap_or_default();
        return Err(SlugValidationError::InvalidCharacter(c));
    }

    Ok(())
}

/// Check a name against the strict grammar
///
/// `test--name` is valid; `test--`, `-` and `test:name` are not.
pub fn is_valid_alpha_num(name: &str) -> bool {
    validate_slug(name, true).is_ok()
}

/// Check a name against the strict (`strict_format == true`) or relaxed grammar
pub fn is_valid_alpha_num_hyphen_underscore(name: &str, strict_format: bool) -> bool {
    validate_slug(name, strict_format).is_ok()
}
