//! Context extraction for inline completion
//!
//! Derives the bounded text window preceding the cursor that becomes the
//! model's view of the document. The window never includes text after the
//! cursor, so future content cannot leak into the prompt.

/// A cursor position within a document
///
/// Both fields are zero-based; `column` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// Immutable snapshot of document text, split into lines
///
/// Created once per trigger from the editor's buffer contents and discarded
/// after the pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Snapshot a document from its full text
    pub fn new(text: &str) -> Self {
        Document {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Get a line by index
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines in the document (an empty document has one empty line)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Bounded window of text preceding the cursor
///
/// Holds at most `lookback + 1` lines: up to `lookback` full lines before
/// the cursor line, then the cursor line truncated at the cursor column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    lines: Vec<String>,
}

impl ContextWindow {
    /// The window's lines, oldest first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines in the window
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The window rendered as a single string
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Extract the context window for a cursor position
///
/// A cursor at the document start collapses the window to the empty prefix
/// of line 0. Positions past the end of the document or line are clamped.
/// Always succeeds.
pub fn extract_context(document: &Document, position: Position, lookback: usize) -> ContextWindow {
    let last_line = document.line_count().saturating_sub(1);
    let cursor_line = position.line.min(last_line);
    let start = cursor_line.saturating_sub(lookback);

    let mut lines = Vec::with_capacity(cursor_line - start + 1);
    for index in start..cursor_line {
        if let Some(line) = document.line(index) {
            lines.push(line.to_string());
        }
    }

    // Cursor line is truncated at the cursor column, counted in characters
    let current = document.line(cursor_line).unwrap_or("");
    let prefix: String = current.chars().take(position.column).collect();
    lines.push(prefix);

    ContextWindow { lines }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod context_tests;
