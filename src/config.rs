//! Configuration types and loading
//!
//! TOML configuration with defaults for every field. A missing file or a
//! missing section falls back to defaults, so a config file is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// API connection section
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Credential for the completion service
    ///
    /// When absent or empty, the pipeline never attempts a network call.
    #[serde(default)]
    pub key: Option<String>,

    /// Base URL including any version path segment
    ///
    /// The client appends only the operation path, so whether the endpoint
    /// carries a `/v1` suffix is decided here, not in code.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            key: None,
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}

/// Inline completion tuning section
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct CompletionConfig {
    /// Completion length ceiling in tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling randomness; low values keep suggestions deterministic
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling bound
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Lookback window size: lines of context preceding the cursor line
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        CompletionConfig {
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            context_lines: default_context_lines(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub completion: CompletionConfig,
}

fn default_base_url() -> String {
    "https://api.deepseek.com/v1".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_max_tokens() -> u32 {
    30
}

fn default_temperature() -> f32 {
    0.2
}

fn default_top_p() -> f32 {
    0.3
}

fn default_context_lines() -> usize {
    2
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing file yields the default configuration; an unreadable or
    /// invalid file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let text = fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }

    /// Default config file path under the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("codeseek").join("config.toml"))
    }

    /// The configured API key, if present and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api
            .key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
