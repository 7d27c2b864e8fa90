//! DeepSeek chat-completions client
//!
//! Posts requests to an OpenAI-compatible chat-completions endpoint over
//! HTTPS with bearer authentication.

use async_trait::async_trait;
use serde::Deserialize;

use super::CompletionService;
use crate::config::Config;
use crate::error::AiError;
use crate::request::CompletionRequest;

/// HTTP client for an OpenAI-compatible chat-completions API
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl DeepSeekClient {
    /// Create a new client
    ///
    /// `base_url` carries any version path segment; the client appends only
    /// the operation path.
    pub fn new(api_key: String, base_url: String) -> Self {
        DeepSeekClient {
            http: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }

    /// Create a client from configuration
    ///
    /// Returns an error when the API key is missing or empty.
    pub fn from_config(config: &Config) -> Result<Self, AiError> {
        let api_key = config.api_key().ok_or_else(|| {
            AiError::NotConfigured("Missing or empty API key in [api] config".to_string())
        })?;

        Ok(DeepSeekClient::new(
            api_key.to_string(),
            config.api.base_url.clone(),
        ))
    }

    /// Endpoint URL for the chat-completions operation
    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// The subset of the chat-completions response schema we read
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice; empty when the service returned none
    fn first_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionService for DeepSeekClient {
    async fn submit(&self, request: &CompletionRequest) -> Result<String, AiError> {
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AiError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AiError::Parse(e.to_string()))?;

        Ok(parsed.first_content())
    }
}

#[cfg(test)]
#[path = "deepseek_tests.rs"]
mod deepseek_tests;
