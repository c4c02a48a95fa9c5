//! Tracing subscriber setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.
//! Development gets human-readable output, production gets JSON lines.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Default log level when `RUST_LOG` is unset
    pub level: Level,
    /// Emit JSON lines instead of the human-readable format
    pub json: bool,
    /// Emit span close events with timing
    pub span_events: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            span_events: false,
        }
    }
}

impl TracingConfig {
    /// Pick a configuration appropriate for the runtime environment
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        if env.is_production() {
            Self {
                level: Level::INFO,
                json: true,
                span_events: false,
            }
        } else {
            Self {
                level: Level::DEBUG,
                json: false,
                span_events: true,
            }
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_string()))
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Initialize the global tracing subscriber
///
/// Respects `RUST_LOG` for filtering when set.
///
/// # Panics
/// Panics if a subscriber is already installed.
pub fn init_tracing(config: &TracingConfig) {
    try_init_tracing(config).expect("tracing subscriber already initialized");
}

/// Initialize the global tracing subscriber without panicking
///
/// # Errors
/// Returns `TracingError::AlreadyInitialized` if a subscriber is already set,
/// which is harmless when called from multiple tests in one process.
pub fn try_init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let result = if config.json {
        registry
            .with(fmt::layer().json().with_span_events(config.span_events()))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(config.span_events()),
            )
            .try_init()
    };

    result.map_err(|_| TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.json);
    }

    #[test]
    fn test_production_config_uses_json() {
        let config = TracingConfig::for_environment(Environment::Production);
        assert!(config.json);
        assert_eq!(config.level, Level::INFO);
    }

    #[test]
    fn test_development_config_is_verbose() {
        let config = TracingConfig::for_environment(Environment::Development);
        assert!(!config.json);
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.span_events);
    }

    // The global subscriber can only be installed once per process, so
    // init behavior is exercised by the integration tests instead.
}
