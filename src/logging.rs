// ABOUTME: Logging configuration and structured logging setup for the meal plan client
// ABOUTME: Selects level and output format from the environment and quiets HTTP library noise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Log lines go to stderr so that command output on stdout stays machine readable.

use anyhow::{Context, Result};
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Service name reported at startup
pub const SERVICE_NAME: &str = "mealplan-client";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Emit span open and close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` lines for log collectors
    Json,
    /// Multi-line human readable output
    Pretty,
    /// One line per event
    #[default]
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; unknown values select the default
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::default(),
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create logging configuration from an arbitrary variable source
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            level: lookup("RUST_LOG")
                .filter(|level| !level.trim().is_empty())
                .unwrap_or(defaults.level),
            format: lookup("LOG_FORMAT").map_or(defaults.format, |value| LogFormat::parse(&value)),
            include_location: lookup("LOG_INCLUDE_LOCATION").is_some(),
            include_thread: lookup("LOG_INCLUDE_THREAD").is_some(),
            include_spans: lookup("LOG_INCLUDE_SPANS").is_some(),
            service_name: defaults.service_name,
            service_version: defaults.service_version,
        }
    }

    /// Same configuration at a different level
    #[must_use]
    pub fn with_level(self, level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..self
        }
    }

    /// Filter built from the configured level plus noise reduction rules
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let directive = |raw: &str, fallback: tracing::Level| {
            raw.parse().unwrap_or_else(|_| fallback.into())
        };

        EnvFilter::new(&self.level)
            .add_directive(directive("hyper=warn", tracing::Level::WARN))
            .add_directive(directive("hyper_util=warn", tracing::Level::WARN))
            .add_directive(directive("reqwest=warn", tracing::Level::WARN))
            .add_directive(directive("rustls=warn", tracing::Level::WARN))
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();

                registry
                    .with(json_layer)
                    .try_init()
                    .context("Failed to install JSON log subscriber")?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);

                registry
                    .with(pretty_layer)
                    .try_init()
                    .context("Failed to install pretty log subscriber")?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry
                    .with(compact_layer)
                    .try_init()
                    .context("Failed to install compact log subscriber")?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Meal plan client starting"
        );
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_formats_fall_back_to_compact() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" pretty "), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("fancy"), LogFormat::Compact);
    }

    #[test]
    fn lookup_reads_level_and_flags() {
        let config = LoggingConfig::from_lookup(|key| match key {
            "RUST_LOG" => Some("mealplan_client=debug".to_owned()),
            "LOG_FORMAT" => Some("json".to_owned()),
            "LOG_INCLUDE_SPANS" => Some("1".to_owned()),
            _ => None,
        });

        assert_eq!(config.level, "mealplan_client=debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.include_spans);
        assert!(!config.include_location);
    }
}
