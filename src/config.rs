//! # Router Configuration
//!
//! Settings that change how the dispatcher behaves, passed explicitly at
//! construction time.
//!
//! ## Environment Variables
//!
//! ### `ROUTEBOARD_SHOW_LOG`
//!
//! Enables or disables the per-request route log lines
//! (`routing with route: ...` and `path does not exist: ...`).
//! Accepts `true`/`false`/`1`/`0`/`yes`/`no`/`on`/`off`.
//!
//! Default: `true`
//!
//! ## YAML
//!
//! ```yaml
//! show_log: false
//! ```
//!
//! Missing keys fall back to their defaults.
//!
//! ## Usage
//!
//! ```rust
//! use routeboard::config::RouterConfig;
//!
//! let config = RouterConfig::from_yaml_str("show_log: false").unwrap();
//! assert!(!config.show_log);
//! assert!(RouterConfig::default().show_log);
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Environment variable read by [`RouterConfig::from_env`].
pub const SHOW_LOG_ENV: &str = "ROUTEBOARD_SHOW_LOG";

/// Dispatcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Emit the route-hit and route-miss log lines (default: true)
    pub show_log: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { show_log: true }
    }
}

impl RouterConfig {
    /// Configuration with route logging turned off.
    #[must_use]
    pub fn quiet() -> Self {
        Self { show_log: false }
    }

    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let show_log = env::var(SHOW_LOG_ENV)
            .ok()
            .and_then(|val| parse_flag(&val))
            .unwrap_or(true);
        RouterConfig { show_log }
    }

    /// Parse configuration from a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document deserializes to unit; treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse router config YAML")
    }

    /// Read and parse a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read router config {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid router config {}", path.display()))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
