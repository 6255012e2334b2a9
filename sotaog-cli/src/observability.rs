//! Tracing subscriber setup with format selection.

use anyhow::{Context, Result};
use std::str::FromStr;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON format for structured logging.
    Json,
    /// Human-readable pretty format with colors.
    Pretty,
    /// Compact single-line format.
    #[default]
    Compact,
}

impl FromStr for LogFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            "compact" => Self::Compact,
            _ => Self::default(),
        })
    }
}

/// Configuration for the CLI's log output.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    log_format: LogFormat,
    log_filter: String,
    include_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_filter: "warn".to_string(),
            include_target: true,
        }
    }
}

impl TracingConfig {
    /// Create a new builder.
    pub fn builder() -> TracingConfigBuilder {
        TracingConfigBuilder::default()
    }

    /// Log output format.
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Filter directive, e.g. `info` or `warn,sotaog_client=debug`.
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Whether the event target is printed.
    pub fn include_target(&self) -> bool {
        self.include_target
    }
}

/// Builder for [`TracingConfig`].
#[derive(Debug, Default)]
pub struct TracingConfigBuilder {
    config: TracingConfig,
}

impl TracingConfigBuilder {
    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.config.log_format = format;
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    pub fn build(self) -> TracingConfig {
        self.config
    }
}

/// Pick the filter directive.
///
/// `-v` flags win, then `LOG_LEVEL`, then `RUST_LOG`; with none of them the
/// CLI only reports warnings. Empty variables count as unset.
pub fn resolve_filter(
    verbosity: u8,
    log_level: Option<String>,
    rust_log: Option<String>,
) -> String {
    let from_flags = match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };

    from_flags
        .map(str::to_string)
        .or_else(|| log_level.filter(|v| !v.is_empty()).map(|v| v.to_lowercase()))
        .or_else(|| rust_log.filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "warn".to_string())
}

/// Install the global subscriber. Logs go to stderr so JSON on stdout stays clean.
pub fn init_tracing(config: TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(config.log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));

    match config.log_format() {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target())
                        .flatten_event(true),
                )
                .try_init()
                .context("Failed to initialize tracing subscriber")?;
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target()),
                )
                .try_init()
                .context("Failed to initialize tracing subscriber")?;
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .compact()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target()),
                )
                .try_init()
                .context("Failed to initialize tracing subscriber")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("PRETTY".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("unknown".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    }

    #[test]
    fn verbosity_overrides_environment() {
        let filter = resolve_filter(2, Some("ERROR".to_string()), Some("trace".to_string()));
        assert_eq!(filter, "debug");
        assert_eq!(resolve_filter(5, None, None), "trace");
    }

    #[test]
    fn log_level_before_rust_log() {
        let filter = resolve_filter(0, Some("INFO".to_string()), Some("trace".to_string()));
        assert_eq!(filter, "info");

        let filter = resolve_filter(0, Some(String::new()), Some("sotaog_client=debug".to_string()));
        assert_eq!(filter, "sotaog_client=debug");
    }

    #[test]
    fn defaults_to_warn() {
        assert_eq!(resolve_filter(0, None, None), "warn");
    }

    #[test]
    fn builder_sets_fields() {
        let config = TracingConfig::builder()
            .log_format(LogFormat::Json)
            .log_filter("debug")
            .build();

        assert_eq!(config.log_format(), LogFormat::Json);
        assert_eq!(config.log_filter(), "debug");
        assert!(config.include_target());
    }
}
