//! Domain layer - Identifiers, names, tags and structural checks

pub mod app_error;
pub mod error;
pub mod etag;
pub mod hashtag;
pub mod id;
pub mod nowhere_nil;
pub mod slug;
pub mod text;

pub use app_error::{map_from_json, map_to_json, AppError};
pub use error::DomainError;
pub use etag::{etag, etag_from_parts, ETAG_VERSION};
pub use hashtag::{parse_hashtags, parse_hashtags_with_limit, ParsedHashtags, MAX_HASHTAGS_LENGTH};
pub use id::{
    is_valid_id, new_id, new_random_string, validate_id, Id, IdValidationError, ID_ALPHABET,
    ID_LENGTH,
};
pub use nowhere_nil::{ensure_nowhere_nil, is_nowhere_nil, NowhereNil};
pub use slug::{
    is_valid_alpha_num, is_valid_alpha_num_hyphen_underscore, validate_slug, SlugValidationError,
};
pub use text::{is_lower, is_valid_email};
