//! Logging infrastructure for registry operations
//!
//! The library emits `tracing` events on every mutation (`trace`) and on
//! every operation that silently did nothing (`debug`). This module installs
//! a `tracing-subscriber` pipeline for binaries and tests that want to see
//! them.
//!
//! # Usage
//!
//! ```rust
//! use classreg::core::logging::{init_logging, LogConfig};
//!
//! // Resolve from CLASSREG_LOG_LEVEL / CLASSREG_LOG_FORMAT / RUST_LOG
//! let _ = init_logging(&LogConfig::from_env());
//!
//! // Or override explicitly
//! let config = LogConfig::from_env().with_level("debug").with_format("pretty");
//! let _ = init_logging(&config);
//! ```
//!
//! # Log Formats
//!
//! - `compact`: Single-line format (default)
//! - `pretty`: Multi-line format with file and line numbers
//! - `json`: JSON lines for log aggregation
//!
//! # Filtering Logs
//!
//! ```bash
//! # Show the no-op diagnostics of the registry only
//! RUST_LOG="classreg::registry=debug" classreg run -i model.classreg
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Environment variable consulted for the log level
pub const LOG_LEVEL_ENV: &str = "CLASSREG_LOG_LEVEL";

/// Environment variable consulted for the log format
pub const LOG_FORMAT_ENV: &str = "CLASSREG_LOG_FORMAT";

const DEFAULT_LEVEL: &str = "info";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact single-line format
    #[default]
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Resolved logging configuration
///
/// Values are kept as strings until [`init_logging`] so that an invalid
/// level can fall back to the default filter instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            format: "compact".to_string(),
        }
    }
}

impl LogConfig {
    /// Resolve from the process environment
    pub fn from_env() -> Self {
        Self::resolve(None, None, |key| std::env::var(key).ok())
    }

    /// Resolve with explicit values taking precedence over `lookup`
    ///
    /// Level: explicit, `CLASSREG_LOG_LEVEL`, `RUST_LOG`, then `info`.
    /// Format: explicit, `CLASSREG_LOG_FORMAT`, then `compact`.
    pub fn resolve(
        level: Option<&str>,
        format: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let level = level
            .map(str::to_string)
            .or_else(|| lookup(LOG_LEVEL_ENV))
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

        let format = format
            .map(str::to_string)
            .or_else(|| lookup(LOG_FORMAT_ENV))
            .unwrap_or_else(|| "compact".to_string());

        Self { level, format }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Build the filter, falling back to `info` on an unparsable level
    pub fn filter(&self) -> EnvFilter {
        if self.level == "off" {
            return EnvFilter::new("off");
        }
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

/// Install the global tracing subscriber described by `config`
///
/// Fails on an unknown format or when a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let format = LogFormat::from_str(&config.format)
        .map_err(|e| format!("Invalid log format: {}", e))?;
    let filter = config.filter();

    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_level(true)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .pretty(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}

/// Initialize logging from the environment alone
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LogConfig::from_env())
}
