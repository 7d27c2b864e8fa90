//! Tests for completion request construction

use super::*;
use crate::context::{Document, Position, extract_context};
use proptest::prelude::*;

fn window_for(text: &str, line: usize, column: usize) -> ContextWindow {
    let document = Document::new(text);
    extract_context(&document, Position::new(line, column), 2)
}

#[test]
fn test_inline_request_has_instructional_system_message() {
    let window = window_for("let x = 1;\nlet y = ", 1, 8);
    let request = build_completion_request(&window, &Config::default());

    assert_eq!(request.messages[0].role, "system");
    assert!(request.messages[0].content.contains("ONLY with code completion"));
    assert!(request.messages[0].content.contains("No markdown"));
}

#[test]
fn test_inline_request_context_ends_with_cursor_marker() {
    let window = window_for("let x = 1;\nlet y = ", 1, 8);
    let request = build_completion_request(&window, &Config::default());

    let user = &request.messages[1];
    assert_eq!(user.role, "user");
    assert!(user.content.ends_with(&format!("let x = 1;\nlet y = {CURSOR_MARKER}")));
}

#[test]
fn test_inline_request_stop_sequences() {
    let window = window_for("x", 0, 1);
    let request = build_completion_request(&window, &Config::default());

    assert_eq!(request.stop, vec!["\n", "//", "/*", "<|endoftext|>"]);
}

#[test]
fn test_inline_request_uses_completion_config() {
    let mut config = Config::default();
    config.api.model = "deepseek-coder".to_string();
    config.completion.max_tokens = 12;
    config.completion.temperature = 0.1;
    config.completion.top_p = 0.5;

    let window = window_for("x", 0, 1);
    let request = build_completion_request(&window, &config);

    assert_eq!(request.model, "deepseek-coder");
    assert_eq!(request.max_tokens, 12);
    assert_eq!(request.temperature, 0.1);
    assert_eq!(request.top_p, Some(0.5));
}

#[test]
fn test_inline_request_accepts_empty_context() {
    let window = window_for("", 0, 0);
    let request = build_completion_request(&window, &Config::default());

    // Building never fails; an empty window still yields the bare marker
    assert!(request.messages[1].content.ends_with(&format!("\n\n{CURSOR_MARKER}")));
}

#[test]
fn test_build_request_prepends_system_message() {
    let template = PromptTemplate::chat();
    let history = vec![
        ChatMessage::user("What is a slice?"),
        ChatMessage::assistant("A view into contiguous memory."),
        ChatMessage::user("Show an example"),
    ];

    let request = build_request(&template, history, "deepseek-chat");

    assert_eq!(request.messages.len(), 4);
    assert_eq!(request.messages[0].role, "system");
    assert_eq!(request.messages[3].content, "Show an example");
}

#[test]
fn test_chat_template_sampling() {
    let template = PromptTemplate::chat();

    assert_eq!(template.temperature, 0.7);
    assert_eq!(template.max_tokens, 1000);
    assert!(template.stop.is_empty());
}

#[test]
fn test_name_suggestions_template() {
    let template = PromptTemplate::name_suggestions();

    assert!(template.system.contains("naming expert"));
    assert!(template.system.contains("numbered list"));
    assert_eq!(template.max_tokens, 200);
}

#[test]
fn test_request_serializes_to_wire_schema() {
    let window = window_for("fn add(", 0, 7);
    let request = build_completion_request(&window, &Config::default());

    let json = serde_json::to_value(&request).expect("request should serialize");

    assert_eq!(json["model"], "deepseek-chat");
    assert_eq!(json["max_tokens"], 30);
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["stop"][0], "\n");
}

#[test]
fn test_serialization_omits_absent_top_p_and_empty_stop() {
    let template = PromptTemplate::chat();
    let request = build_request(&template, vec![ChatMessage::user("hi")], "deepseek-chat");

    let json = serde_json::to_value(&request).expect("request should serialize");

    assert!(json.get("top_p").is_none());
    assert!(json.get("stop").is_none());
}

// For any context text, the user message embeds the window verbatim with
// the cursor marker appended after it.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_context_embedded_verbatim(text in "[a-zA-Z0-9 (){};=+.\n]{0,120}") {
        let document = Document::new(&text);
        let last_line = document.line_count() - 1;
        let column = document.line(last_line).unwrap_or("").chars().count();
        let window = extract_context(&document, Position::new(last_line, column), usize::MAX);

        let request = build_completion_request(&window, &Config::default());
        let user = &request.messages[1].content;

        prop_assert!(user.ends_with(&format!("{}{}", window.text(), CURSOR_MARKER)), "user content does not end with context text followed by cursor marker");
    }
}
