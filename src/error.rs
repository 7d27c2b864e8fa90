//! Error types for AI operations
//!
//! Defines the AiError taxonomy for the completion pipeline, the Fault
//! classification for failed service calls, and ConfigError for config files.

use thiserror::Error;

/// Errors that can occur during AI operations
#[derive(Debug, Error)]
pub enum AiError {
    /// AI is not configured (missing API key or model)
    #[error("AI not configured: {0}")]
    NotConfigured(String),

    /// Network error during API request
    #[error("Network error: {0}")]
    Network(String),

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request was cancelled
    #[error("Request cancelled")]
    Cancelled,
}

/// Coarse classification of a failed service call
///
/// Used for logging and host display; the inline pipeline downgrades every
/// fault to "no suggestion" regardless of classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Credential rejected by the service (HTTP 401/403)
    Unauthorized,
    /// Too many requests (HTTP 429)
    RateLimited,
    /// The service failed internally (HTTP 5xx or any other API error)
    ServerFault,
    /// The request never produced an HTTP response
    NetworkFault,
}

impl AiError {
    /// Classify this error, if it represents a failed service call
    pub fn fault(&self) -> Option<Fault> {
        match self {
            AiError::Api { code: 401 | 403, .. } => Some(Fault::Unauthorized),
            AiError::Api { code: 429, .. } => Some(Fault::RateLimited),
            AiError::Api { .. } => Some(Fault::ServerFault),
            AiError::Network(_) => Some(Fault::NetworkFault),
            AiError::NotConfigured(_) | AiError::Parse(_) | AiError::Cancelled => None,
        }
    }
}

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
