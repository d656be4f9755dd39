//! Hashtag scanner
//!
//! A small state machine over Unicode code points. Whitespace separates
//! tokens; inside a token a `#` that is not glued to a preceding letter or
//! digit opens a candidate, and the first character outside the tag body set
//! closes it. Whatever follows in the same token is ignored.

use tracing::trace;

/// Minimum number of body characters after the `#`
pub const MIN_HASHTAG_BODY_LENGTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Looking for the opening `#` of a candidate
    Searching,
    /// Inside a run of one or more `#`
    Hashes,
    /// Inside a `#` run glued to a preceding letter or digit
    GluedHashes,
    /// Consuming the tag body
    Body,
    /// Candidate closed, ignore the rest of the token
    Skipping,
}

/// A whitespace-delimited word and the tag it produced, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedToken {
    pub word: String,
    pub hashtag: Option<String>,
}

fn is_body_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '-' || c == '_'
}

/// Turn a raw body into a normalized tag, or reject it
fn finish_body(body: &str) -> Option<String> {
    let body = body.trim_end_matches(['-', '_']);

    let starts_with_letter = body.chars().next().is_some_and(char::is_alphabetic);
    if !starts_with_letter || body.chars().count() < MIN_HASHTAG_BODY_LENGTH {
        trace!(candidate = body, "Rejected hashtag candidate");
        return None;
    }

    Some(format!("#{}", body))
}

/// Scanner over a single input text
#[derive(Debug)]
pub struct HashtagScanner {
    state: State,
    prev: Option<char>,
    word: String,
    body: String,
    hashtag: Option<String>,
    tokens: Vec<ScannedToken>,
}

impl HashtagScanner {
    pub fn new() -> Self {
        Self {
            state: State::Searching,
            prev: None,
            word: String::new(),
            body: String::new(),
            hashtag: None,
            tokens: Vec::new(),
        }
    }

    /// Scan `text` and return every token in input order
    pub fn scan(mut self, text: &str) -> Vec<ScannedToken> {
        for c in text.chars() {
            self.feed(c);
        }
        self.end_token();
        self.tokens
    }

    fn feed(&mut self, c: char) {
        if c.is_whitespace() {
            self.end_token();
            return;
        }

        self.word.push(c);

        let state = self.state;
        self.state = match state {
            State::Searching => {
                let glued = self.prev.is_some_and(char::is_alphanumeric);
                match (c, glued) {
                    ('#', false) => State::Hashes,
                    ('#', true) => State::GluedHashes,
                    _ => State::Searching,
                }
            }
            State::GluedHashes if c == '#' => State::GluedHashes,
            State::GluedHashes => State::Searching,
            State::Hashes if c == '#' => State::Hashes,
            State::Hashes | State::Body if is_body_char(c) => {
                self.body.push(c);
                State::Body
            }
            State::Hashes | State::Body => {
                self.close_candidate();
                State::Skipping
            }
            State::Skipping => State::Skipping,
        };

        self.prev = Some(c);
    }

    fn close_candidate(&mut self) {
        self.hashtag = finish_body(&self.body);
        self.body.clear();
    }

    fn end_token(&mut self) {
        if matches!(self.state, State::Hashes | State::Body) {
            self.close_candidate();
        }

        if !self.word.is_empty() {
            self.tokens.push(ScannedToken {
                word: std::mem::take(&mut self.word),
                hashtag: self.hashtag.take(),
            });
        }

        self.state = State::Searching;
        self.prev = None;
    }
}

impl Default for HashtagScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<String> {
        HashtagScanner::new()
            .scan(text)
            .into_iter()
            .filter_map(|t| t.hashtag)
            .collect()
    }

    #[test]
    fn test_tokens_split_on_whitespace() {
        let tokens = HashtagScanner::new().scan("hi\t#there\n  you");
        let words: Vec<&str> = tokens.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["hi", "#there", "you"]);
        assert_eq!(tokens[1].hashtag.as_deref(), Some("#there"));
        assert_eq!(tokens[0].hashtag, None);
    }

    #[test]
    fn test_glued_hash_is_not_a_start() {
        assert!(tags("foo#bar").is_empty());
        assert!(tags("9#bar").is_empty());
        assert!(tags("ö#bar").is_empty());
    }

    #[test]
    fn test_glued_hash_run_is_not_a_start() {
        assert!(tags("foo##bar").is_empty());
        assert!(tags("foo###bar").is_empty());
        assert_eq!(tags("foo##.#bar"), vec!["#bar"]);
    }

    #[test]
    fn test_punctuation_before_hash_is_a_boundary() {
        assert_eq!(tags("(#brakets)"), vec!["#brakets"]);
        assert_eq!(tags("_#under_"), vec!["#under"]);
        assert_eq!(tags("-#minus-"), vec!["#minus"]);
    }

    #[test]
    fn test_hash_run_collapses() {
        assert_eq!(tags("##brown#"), vec!["#brown"]);
        assert_eq!(tags("####x1"), vec!["#x1"]);
    }

    #[test]
    fn test_rest_of_token_is_ignored_after_close() {
        assert_eq!(tags("#bug,#idea"), vec!["#bug"]);
        assert!(tags("#?test").is_empty());
    }

    #[test]
    fn test_body_start_rules() {
        assert!(tags("#1").is_empty());
        assert!(tags("#a").is_empty());
        assert!(tags("#123test123").is_empty());
        assert!(tags("#-test").is_empty());
        assert!(tags("#_test").is_empty());
        assert_eq!(tags("#test123"), vec!["#test123"]);
    }

    #[test]
    fn test_trailing_separators_do_not_count_toward_length() {
        assert!(tags("#a--").is_empty());
        assert_eq!(tags("#ab__"), vec!["#ab"]);
    }

    #[test]
    fn test_unicode_letters_allowed() {
        assert_eq!(tags("#hüllo"), vec!["#hüllo"]);
        assert_eq!(tags("#Mötley;"), vec!["#Mötley"]);
        assert_eq!(tags("¿#upside¿"), vec!["#upside"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(HashtagScanner::new().scan("").is_empty());
        assert!(HashtagScanner::new().scan("   ").is_empty());
    }
}
