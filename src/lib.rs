//! codeseek - inline AI code completion pipeline for editor integrations
//!
//! The crate implements the single-shot request pipeline behind an inline
//! completion provider: extract a bounded context window around the cursor,
//! build a constrained chat-completion request, await the completion
//! service, sanitize the raw model text into one insertable fragment, and
//! emit a zero-width-anchored suggestion (or nothing).
//!
//! The editor supplies a document snapshot, the cursor position, a live
//! cursor view for stale-result discard, and a cancellation token; the
//! pipeline never surfaces an error on the keystroke path.

pub mod assist;
pub mod config;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod provider;
pub mod request;
pub mod sanitize;
pub mod suggestion;

pub use config::Config;
pub use context::{ContextWindow, Document, Position};
pub use error::{AiError, ConfigError, Fault};
pub use pipeline::{CompletionPipeline, CompletionTrigger, CursorTracker};
pub use provider::{CompletionService, DeepSeekClient};
pub use request::{ChatMessage, CompletionRequest, PromptTemplate};
pub use suggestion::{InlineSuggestion, Range};
