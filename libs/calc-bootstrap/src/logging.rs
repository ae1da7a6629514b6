//! Logging initialisation.
//!
//! One global `tracing` subscriber per process, writing to stderr so that
//! stdout stays free for program output (the CLI prints results there).

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable single-line records.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

/// Logging section of a binary's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `calculator=debug,tonic=warn`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Config with the given default directive.
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Self::default()
        }
    }

    /// Apply a `-v` count from the command line.
    ///
    /// `0` keeps the configured level, `1` is info, `2` is debug, `3+` is trace.
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        let level = match verbose {
            0 => return self,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        self.level = level.to_owned();
        self
    }
}

/// Build the filter: a non-empty `RUST_LOG` wins over the configured level.
///
/// # Errors
/// Returns an error if the directive cannot be parsed.
pub fn build_filter(level: &str) -> anyhow::Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(&directive)
            .with_context(|| format!("invalid RUST_LOG directive: {directive}")),
        _ => EnvFilter::try_new(level)
            .with_context(|| format!("invalid logging level directive: {level}")),
    }
}

/// Install the global subscriber.
///
/// # Errors
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = build_filter(&cfg.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    match cfg.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    }
    .context("failed to install tracing subscriber")
}
