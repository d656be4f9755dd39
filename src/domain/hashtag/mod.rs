//! Hashtag domain module
//!
//! Extracts `#tags` from free text. A tag body starts with a letter, may
//! contain letters, digits, hyphens and underscores, and must be at least two
//! characters long.

mod parser;
mod scanner;

pub use parser::{parse_hashtags, parse_hashtags_with_limit, ParsedHashtags, MAX_HASHTAGS_LENGTH};
pub use scanner::{HashtagScanner, ScannedToken, MIN_HASHTAG_BODY_LENGTH};
