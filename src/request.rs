//! Completion request construction
//!
//! Turns a context window into an immutable chat-completion request. Every
//! operation (inline completion, chat, name suggestions, README) goes
//! through the same builder, parameterized by a PromptTemplate, instead of
//! duplicating a request path per operation.

use serde::Serialize;

use crate::config::Config;
use crate::context::ContextWindow;

/// Marker appended to the context text to show the model where the cursor is
pub const CURSOR_MARKER: &str = "|";

/// End-of-text stop marker recognized by the completion endpoint
const END_OF_TEXT: &str = "<|endoftext|>";

/// A single chat message in the provider's wire schema
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Instruction text, sampling parameters, and stop markers for one operation
///
/// Selecting a template is the only thing that distinguishes the request
/// paths of the different operations.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    /// Instructional system message content
    pub system: String,
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub max_tokens: u32,
    /// Stop sequences; empty means run to the token ceiling
    pub stop: Vec<String>,
}

impl PromptTemplate {
    /// Template for single-fragment inline completion
    ///
    /// Instructs the service to return only a code fragment and to halt at
    /// the first line break, comment opener, or end-of-text marker. Sampling
    /// comes from the completion config so it stays near-deterministic.
    pub fn inline_completion(config: &Config) -> Self {
        PromptTemplate {
            system: "Respond ONLY with code completion for the provided context. \
                     No explanations. No markdown. No natural language."
                .to_string(),
            temperature: config.completion.temperature,
            top_p: Some(config.completion.top_p),
            max_tokens: config.completion.max_tokens,
            stop: vec![
                "\n".to_string(),
                "//".to_string(),
                "/*".to_string(),
                END_OF_TEXT.to_string(),
            ],
        }
    }

    /// Template for chat-panel turns
    pub fn chat() -> Self {
        PromptTemplate {
            system: "You are CodeSeek, an AI coding assistant. Help the user with \
                     coding questions, explain concepts, and provide code examples \
                     when appropriate. Be concise but thorough."
                .to_string(),
            temperature: 0.7,
            top_p: None,
            max_tokens: 1000,
            stop: Vec::new(),
        }
    }

    /// Template for identifier name suggestions
    pub fn name_suggestions() -> Self {
        PromptTemplate {
            system: "You are a naming expert for code. Given a code snippet, suggest \
                     5 clear, concise, and descriptive names for it. Match the casing \
                     convention to what is being named: camelCase or snake_case for \
                     functions and variables, PascalCase for classes, \
                     UPPER_SNAKE_CASE for constants. Consider the language and \
                     framework conventions. Return ONLY a numbered list with no \
                     additional text."
                .to_string(),
            temperature: 0.7,
            top_p: None,
            max_tokens: 200,
            stop: Vec::new(),
        }
    }

    /// Template for README generation
    pub fn readme() -> Self {
        PromptTemplate {
            system: "You are a documentation expert. Generate a comprehensive \
                     README.md for a project based on the provided information. \
                     Include a project title and description, features, installation \
                     instructions, usage examples, API documentation if applicable, \
                     contributing guidelines, and license information. Use proper \
                     Markdown formatting with headers, lists, and code blocks. Be \
                     concise but thorough. If information is missing, make \
                     reasonable assumptions based on the project name and files."
                .to_string(),
            temperature: 0.7,
            top_p: None,
            max_tokens: 1500,
            stop: Vec::new(),
        }
    }
}

/// An immutable chat-completion request
///
/// Serializes directly into the provider's chat-completions schema.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
}

/// Assemble a request from a template and caller-supplied messages
///
/// The template's system message always leads the conversation. Building
/// never fails.
pub fn build_request(
    template: &PromptTemplate,
    messages: Vec<ChatMessage>,
    model: &str,
) -> CompletionRequest {
    let mut all_messages = Vec::with_capacity(messages.len() + 1);
    all_messages.push(ChatMessage::system(template.system.clone()));
    all_messages.extend(messages);

    CompletionRequest {
        model: model.to_string(),
        messages: all_messages,
        temperature: template.temperature,
        top_p: template.top_p,
        max_tokens: template.max_tokens,
        stop: template.stop.clone(),
    }
}

/// Build the inline-completion request for a context window
///
/// The contextual message carries the window text with an explicit cursor
/// marker appended so the model knows exactly where the insertion happens.
pub fn build_completion_request(window: &ContextWindow, config: &Config) -> CompletionRequest {
    let template = PromptTemplate::inline_completion(config);
    let content = format!(
        "Complete this code. The current cursor position is shown by {CURSOR_MARKER}. \
         Only respond with the code to insert.\n\n{}{CURSOR_MARKER}",
        window.text()
    );

    build_request(&template, vec![ChatMessage::user(content)], &config.api.model)
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod request_tests;
