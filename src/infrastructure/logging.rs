use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

/// Directives from `RUST_LOG` win over the configured level
fn level_filter(config: &LoggingConfig, env_directives: Option<&str>) -> EnvFilter {
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(&config.level))
}

/// Install a global tracing subscriber for the validation events
///
/// The library emits plain events and opens no spans, so JSON output is
/// flattened without span context. Fails if a global subscriber is already
/// installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let registry = tracing_subscriber::registry()
        .with(level_filter(config, env_directives.as_deref()));

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .try_init()?,
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_target(true))
            .try_init()?,
    }

    tracing::debug!(level = %config.level, format = ?config.format, "textguard logging ready");
    Ok(())
}
