//! Hashtag extraction from free text

use serde::{Deserialize, Serialize};

use super::scanner::HashtagScanner;

/// Maximum byte length of the normalized hashtag string
pub const MAX_HASHTAGS_LENGTH: usize = 1000;

/// Result of extracting hashtags from a text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedHashtags {
    /// Normalized tags joined by single spaces, empty when none were found
    pub hashtags: String,
    /// The same tags, in order of appearance
    pub tags: Vec<String>,
    /// Words that did not produce a tag, joined by single spaces
    pub plain_text: String,
}

impl ParsedHashtags {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Strip leading punctuation (except `#`) and trailing punctuation from a word
fn trim_punctuation(word: &str) -> &str {
    let is_word_char = |c: char| c.is_alphabetic() || c.is_ascii_digit();

    word.trim_start_matches(|c: char| !is_word_char(c) && c != '#')
        .trim_end_matches(|c: char| !is_word_char(c))
}

/// Extract hashtags from `text` using the default length cap
pub fn parse_hashtags(text: &str) -> ParsedHashtags {
    parse_hashtags_with_limit(text, MAX_HASHTAGS_LENGTH)
}

/// Extract hashtags from `text`, keeping whole tags while the joined string
/// stays within `max_length` bytes
pub fn parse_hashtags_with_limit(text: &str, max_length: usize) -> ParsedHashtags {
    let mut tags = Vec::new();
    let mut plain_words = Vec::new();

    for token in HashtagScanner::new().scan(text) {
        match token.hashtag {
            Some(tag) => tags.push(tag),
            None => {
                let word = trim_punctuation(&token.word);
                if !word.is_empty() {
                    plain_words.push(word.to_string());
                }
            }
        }
    }

    let mut length = 0;
    let mut kept = 0;
    for tag in &tags {
        let added = if kept == 0 { tag.len() } else { tag.len() + 1 };
        if length + added > max_length {
            break;
        }
        length += added;
        kept += 1;
    }

    if kept < tags.len() {
        tracing::debug!(
            found = tags.len(),
            kept,
            max_length,
            "Hashtag list truncated"
        );
        tags.truncate(kept);
    }

    ParsedHashtags {
        hashtags: tags.join(" "),
        tags,
        plain_text: plain_words.join(" "),
    }
}
