//! Completion service boundary
//!
//! Defines the CompletionService trait the pipeline depends on and the
//! DeepSeek HTTP implementation. The pipeline treats the service as opaque:
//! one request in, raw text or an error out.

use async_trait::async_trait;

use crate::error::AiError;
use crate::request::CompletionRequest;

mod deepseek;

pub use deepseek::DeepSeekClient;

/// A service capable of answering a single completion request
///
/// Implementations perform the network call; callers own retry policy
/// (the inline pipeline has none) and error downgrading.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Submit a request and return the raw model text
    ///
    /// The returned text is completely untrusted: it may be empty,
    /// multi-line, fenced, or conversational.
    async fn submit(&self, request: &CompletionRequest) -> Result<String, AiError>;
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
