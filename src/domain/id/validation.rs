//! Identifier validation

use thiserror::Error;

use super::generator::{ID_ALPHABET, ID_LENGTH};

/// Errors that can occur during identifier validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IdValidationError {
    #[error("ID cannot be empty")]
    Empty,

    #[error("ID must be exactly {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("ID contains invalid character: '{0}'")]
    InvalidCharacter(char),
}

/// Validate an identifier
///
/// The identifier must be exactly [`ID_LENGTH`] characters drawn from the
/// generator alphabet. Nothing may surround it.
pub fn validate_id(id: &str) -> Result<(), IdValidationError> {
    if id.is_empty() {
        return Err(IdValidationError::Empty);
    }

    let length = id.chars().count();
    if length != ID_LENGTH {
        return Err(IdValidationError::InvalidLength {
            expected: ID_LENGTH,
            actual: length,
        });
    }

    if let Some(c) = id
        .chars()
        .find(|c| !c.is_ascii() || !ID_ALPHABET.contains(&(*c as u8)))
    {
        return Err(IdValidationError::InvalidCharacter(c));
    }

    Ok(())
}

/// Check whether a string is a well-formed identifier
pub fn is_valid_id(id: &str) -> bool {
    validate_id(id).is_ok()
}
