//! Configuration loaded from files and `TEXTGUARD__*` environment variables

mod app_config;

pub use app_config::{AppConfig, HashtagConfig, LogFormat, LoggingConfig};
