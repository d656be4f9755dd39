//! Slug domain module
//!
//! Human-chosen short names restricted to a safe character grammar.

mod validation;

pub use validation::{
    is_valid_alpha_num, is_valid_alpha_num_hyphen_underscore, validate_slug, SlugValidationError,
};
