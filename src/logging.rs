//! Logging setup for Lei Trie.
//!
//! Installs a `tracing` subscriber built from [`LogConfig`]. `RUST_LOG`, when
//! set, takes precedence over the configured level.

use crate::config::LogConfig;
use crate::error::{LeiError, LeiResult};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Builds the event filter for the given configuration.
fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Initialize the logging system.
///
/// # Returns
///
/// * `Ok(())` if the subscriber was installed
/// * `Err(LeiError::Logging)` if a global subscriber is already set
pub fn init_logging(config: &LogConfig) -> LeiResult<()> {
    let fmt_layer = if config.json {
        fmt::layer()
            .json()
            .with_file(config.source_location)
            .with_line_number(config.source_location)
            .boxed()
    } else {
        fmt::layer()
            .pretty()
            .with_file(config.source_location)
            .with_line_number(config.source_location)
            .with_thread_names(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_filter(config))
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| LeiError::Logging(format!("Failed to set global tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_fails() {
        let config = LogConfig::default();

        // Another test may already have installed a subscriber.
        let _ = init_logging(&config);

        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, LeiError::Logging(_)));
    }
}
