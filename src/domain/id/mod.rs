//! Identifier domain module
//!
//! Compact random identifiers used as unique keys, plus random strings drawn
//! from the same alphabet.

mod entity;
mod generator;
mod validation;

pub use entity::Id;
pub use generator::{new_id, new_random_string, ID_ALPHABET, ID_LENGTH};
pub use validation::{is_valid_id, validate_id, IdValidationError};
