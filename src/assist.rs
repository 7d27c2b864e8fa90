//! Command-style assistant operations
//!
//! Chat forwarding, identifier-name suggestions, and README generation.
//! These share the service boundary and request builder with the inline
//! pipeline but propagate errors to the caller: they run behind explicit
//! user commands, not the keystroke path, so silent degradation does not
//! apply.

use crate::config::Config;
use crate::error::AiError;
use crate::provider::CompletionService;
use crate::request::{self, ChatMessage, PromptTemplate};

/// Forward a chat history and return the assistant's reply
///
/// `history` holds the prior user/assistant turns, oldest first; the
/// template's system message is prepended by the builder.
pub async fn chat(
    service: &dyn CompletionService,
    config: &Config,
    history: &[ChatMessage],
) -> Result<String, AiError> {
    let template = PromptTemplate::chat();
    let chat_request = request::build_request(&template, history.to_vec(), &config.api.model);
    service.submit(&chat_request).await
}

/// Suggest identifier names for a code snippet
///
/// Returns the parsed names in the order the model listed them; an
/// unparseable reply yields an empty vec rather than an error.
pub async fn suggest_names(
    service: &dyn CompletionService,
    config: &Config,
    snippet: &str,
) -> Result<Vec<String>, AiError> {
    let template = PromptTemplate::name_suggestions();
    let name_request = request::build_request(
        &template,
        vec![ChatMessage::user(format!(
            "Suggest names for this code:\n\n{snippet}"
        ))],
        &config.api.model,
    );

    let raw = service.submit(&name_request).await?;
    Ok(parse_numbered_names(&raw))
}

/// Parse a numbered list of name suggestions into clean identifiers
///
/// Accepts lines like `1. parse_input` or "2. `parseInput`"; lines that
/// carry no identifier are skipped.
pub fn parse_numbered_names(response: &str) -> Vec<String> {
    response.lines().filter_map(parse_name_line).collect()
}

/// Extract the identifier from one numbered line, if it has one
fn parse_name_line(line: &str) -> Option<String> {
    let line = line.trim();

    // Require a leading "N." ordinal
    let dot_pos = line.find('.')?;
    let ordinal = &line[..dot_pos];
    if ordinal.is_empty() || !ordinal.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    // Strip surrounding backticks the model sometimes adds
    let rest = line[dot_pos + 1..].trim().trim_matches('`');

    let name: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if name.is_empty() { None } else { Some(name) }
}

/// Facts about a project used to build the README prompt
///
/// Gathering these (walking the tree, reading the manifest) is the host's
/// concern; this module only turns them into a prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Project name, typically the workspace directory name
    pub name: String,
    /// Sample of project file paths, relative to the workspace root
    pub files: Vec<String>,
    /// Languages detected in the project
    pub languages: Vec<String>,
    /// Raw manifest excerpt (Cargo.toml, package.json), if available
    pub manifest: Option<String>,
}

/// Generate README markdown for a project
pub async fn generate_readme(
    service: &dyn CompletionService,
    config: &Config,
    info: &ProjectInfo,
) -> Result<String, AiError> {
    let template = PromptTemplate::readme();
    let readme_request = request::build_request(
        &template,
        vec![ChatMessage::user(readme_prompt(info))],
        &config.api.model,
    );
    service.submit(&readme_request).await
}

/// Render the user-facing README prompt from project facts
fn readme_prompt(info: &ProjectInfo) -> String {
    // Cap the file listing so a large workspace cannot blow up the prompt
    const MAX_LISTED_FILES: usize = 20;

    let manifest = info.manifest.as_deref().unwrap_or("Not available");
    let languages = if info.languages.is_empty() {
        "Unknown".to_string()
    } else {
        info.languages.join(", ")
    };
    let files = info
        .files
        .iter()
        .take(MAX_LISTED_FILES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Generate a README.md for my project with the following information:\n\n\
         Project name: {}\n\n\
         Manifest (if available): {}\n\n\
         Languages used: {}\n\n\
         Files (sample):\n{}",
        info.name, manifest, languages, files
    )
}

#[cfg(test)]
#[path = "assist_tests.rs"]
mod assist_tests;
