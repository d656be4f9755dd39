use serde::Deserialize;

use crate::domain::hashtag::{parse_hashtags_with_limit, ParsedHashtags, MAX_HASHTAGS_LENGTH};

/// Library configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub hashtags: HashtagConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Hashtag extraction settings
#[derive(Debug, Clone, Deserialize)]
pub struct HashtagConfig {
    /// Maximum byte length of the joined hashtag string
    #[serde(default = "default_max_hashtags_length")]
    pub max_length: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_hashtags_length() -> usize {
    MAX_HASHTAGS_LENGTH
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for HashtagConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_hashtags_length(),
        }
    }
}

impl HashtagConfig {
    /// Extract hashtags using the configured length cap
    pub fn parse(&self, text: &str) -> ParsedHashtags {
        parse_hashtags_with_limit(text, self.max_length)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("TEXTGUARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        tracing::debug!(
            level = %loaded.logging.level,
            max_hashtags_length = loaded.hashtags.max_length,
            "Configuration loaded"
        );

        Ok(loaded)
    }
}
