//! Inline completion pipeline
//!
//! The linear flow run once per trigger: Context -> Request -> await the
//! service -> Sanitize -> Emit-or-suppress. Each run is stateless and owns
//! its values; overlapping runs never coordinate. Every failure mode
//! resolves to an empty suggestion vec so a failed suggestion cannot
//! interrupt typing.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::context::{self, Document, Position};
use crate::provider::{CompletionService, DeepSeekClient};
use crate::request;
use crate::sanitize::sanitize;
use crate::suggestion::{self, InlineSuggestion};

/// A single completion trigger event
///
/// Created per keystroke from the editor's buffer snapshot and cursor
/// position, discarded after one pipeline run.
#[derive(Debug, Clone)]
pub struct CompletionTrigger {
    pub document: Document,
    pub position: Position,
}

impl CompletionTrigger {
    pub fn new(document: Document, position: Position) -> Self {
        CompletionTrigger { document, position }
    }
}

/// Editor-side view of the live cursor
///
/// Polled after the network await. A result whose trigger position no
/// longer matches the live cursor is suppressed instead of being inserted
/// at a stale position.
pub trait CursorTracker: Send + Sync {
    /// The cursor position right now
    fn position(&self) -> Position;
}

/// Inline completion pipeline bound to one completion service
///
/// Construct once per configuration change and share by reference across
/// trigger invocations; `run` takes the configuration explicitly so there
/// is no hidden client state to go stale when credentials change.
pub struct CompletionPipeline<S: CompletionService> {
    service: Option<S>,
    warned_not_configured: AtomicBool,
}

impl CompletionPipeline<DeepSeekClient> {
    /// Build the pipeline from configuration
    ///
    /// A missing API key yields a pipeline that short-circuits every run to
    /// "no suggestion" without touching the network.
    pub fn from_config(config: &Config) -> Self {
        match DeepSeekClient::from_config(config) {
            Ok(client) => CompletionPipeline::new(client),
            Err(e) => {
                log::debug!("completion service unavailable: {}", e);
                CompletionPipeline::disabled()
            }
        }
    }
}

impl<S: CompletionService> CompletionPipeline<S> {
    /// Create a pipeline around an existing service
    pub fn new(service: S) -> Self {
        CompletionPipeline {
            service: Some(service),
            warned_not_configured: AtomicBool::new(false),
        }
    }

    /// Create a pipeline with no service; every run yields no suggestion
    pub fn disabled() -> Self {
        CompletionPipeline {
            service: None,
            warned_not_configured: AtomicBool::new(false),
        }
    }

    /// Run one completion trigger to produce zero or one suggestions
    ///
    /// Suspends only while awaiting the service. Cancellation, service
    /// failure, an empty or conversational response, and a moved cursor all
    /// yield an empty vec; no error escapes the pipeline boundary.
    pub async fn run(
        &self,
        config: &Config,
        trigger: &CompletionTrigger,
        cursor: &dyn CursorTracker,
        cancel: &CancellationToken,
    ) -> Vec<InlineSuggestion> {
        let service = match &self.service {
            Some(service) if config.api_key().is_some() => service,
            _ => {
                self.warn_not_configured();
                return Vec::new();
            }
        };

        let window = context::extract_context(
            &trigger.document,
            trigger.position,
            config.completion.context_lines,
        );
        let completion_request = request::build_completion_request(&window, config);

        // The cancel arm is polled first so a token cancelled before or
        // during the await wins over a ready response
        let raw = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("completion request cancelled");
                return Vec::new();
            }
            result = service.submit(&completion_request) => match result {
                Ok(text) => text,
                Err(e) => {
                    log::debug!("completion request failed ({:?}): {}", e.fault(), e);
                    return Vec::new();
                }
            },
        };

        // Discard results that arrive after the cursor has moved
        if cursor.position() != trigger.position {
            log::debug!("discarding completion for a stale cursor position");
            return Vec::new();
        }

        let text = sanitize(&raw, config.completion.max_tokens);
        suggestion::emit(text, trigger.position)
    }

    /// Surface the missing-credential condition once per pipeline value
    fn warn_not_configured(&self) {
        if !self.warned_not_configured.swap(true, Ordering::Relaxed) {
            log::warn!("no API key configured; inline completion is disabled");
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;
