//! Configuration for an activated renderer.
//!
//! This module provides:
//! - `RendererConfig`: Settings read once at activation
//! - `ConfigError`: Errors raised while loading settings

use serde::Deserialize;
use thiserror::Error;

/// Lines shown for a stream chunk or plain text output before eliding.
pub const DEFAULT_LINE_LIMIT: usize = 30;

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Settings for one activation.
///
/// Missing fields take their defaults, so an empty document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Line cap for stream chunks and plain text; zero disables it
    pub line_limit: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            line_limit: DEFAULT_LINE_LIMIT,
        }
    }
}

impl RendererConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line limit.
    pub fn with_line_limit(mut self, line_limit: usize) -> Self {
        self.line_limit = line_limit;
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a configuration from YAML.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }
}
