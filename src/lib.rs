//! textguard
//!
//! Validation primitives for values that cross a trust boundary:
//! - Random identifiers and random strings
//! - Identifier and slug grammar checks
//! - Hashtag extraction from free text
//! - Etags for cache validation
//! - Structural checks that public fields hold no absent values

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use domain::*;
pub use infrastructure::init_logging;
