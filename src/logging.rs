//! Structured logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! application's job. This module provides the subscriber the `routeboard`
//! binary uses, configured from environment variables:
//!
//! - `ROUTEBOARD_LOG_LEVEL` - trace/debug/info/warn/error (default `info`)
//! - `ROUTEBOARD_LOG_FORMAT` - `json` or `pretty` (default `pretty`)
//! - `ROUTEBOARD_LOG_TARGET_FILTER` - extra comma-separated filter directives
//! - `ROUTEBOARD_LOG_INCLUDE_LOCATION` - include file:line (default `false`)
//!
//! `RUST_LOG`, when set, takes precedence over the configured level. Output
//! goes to stderr so it never mixes with command output on stdout.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const LEVEL_ENV: &str = "ROUTEBOARD_LOG_LEVEL";
const FORMAT_ENV: &str = "ROUTEBOARD_LOG_FORMAT";
const TARGET_FILTER_ENV: &str = "ROUTEBOARD_LOG_TARGET_FILTER";
const LOCATION_ENV: &str = "ROUTEBOARD_LOG_INCLUDE_LOCATION";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// Anything other than `json` (any case) reads as pretty.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_level: String,
    pub format: LogFormat,
    /// Extra `EnvFilter` directives, comma-separated.
    pub target_filter: Option<String>,
    pub include_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO.as_str().to_lowercase(),
            format: LogFormat::default(),
            target_filter: None,
            include_location: false,
        }
    }
}

impl LogConfig {
    /// Read the `ROUTEBOARD_LOG_*` variables; unset ones keep their default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(level) = env::var(LEVEL_ENV) {
            config.log_level = level;
        }
        if let Ok(format) = env::var(FORMAT_ENV) {
            config.format = LogFormat::parse(&format);
        }
        config.target_filter = env::var(TARGET_FILTER_ENV).ok();
        config.include_location = env::var(LOCATION_ENV)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(false);
        config
    }

    fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    /// Level filter plus any valid extra directives. Invalid directives are
    /// reported on stderr and skipped; the subscriber is not up yet.
    fn env_filter(&self) -> EnvFilter {
        let base = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level().as_str()));

        self.target_filter
            .iter()
            .flat_map(|f| f.split(','))
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .fold(base, |filter, directive| match directive.parse() {
                Ok(d) => filter.add_directive(d),
                Err(_) => {
                    eprintln!("Warning: Invalid log filter directive: {directive}");
                    filter
                }
            })
    }

    fn fmt_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_writer(std::io::stderr);

        match self.format {
            LogFormat::Json => layer.json().with_thread_ids(true).boxed(),
            LogFormat::Pretty => layer.pretty().boxed(),
        }
    }
}

/// Install the global subscriber described by `config`.
///
/// Fails if a global subscriber has already been set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(config.fmt_layer())
        .with(config.env_filter())
        .try_init()
        .context("Failed to initialize logging")
}
