//! Response sanitization
//!
//! Reduces raw model output to a single-line, non-conversational,
//! length-capped code fragment. An empty result means "no suggestion".

/// Practical character budget per requested token
const CHARS_PER_TOKEN: usize = 4;

/// Openers that mark a refusal or prose reply rather than code
const CONVERSATIONAL_OPENERS: [&str; 4] = ["please", "sorry", "can i", "would you"];

/// Sanitize raw model output into an insertable fragment
///
/// Strips everything from the first code-fence marker to the end of the
/// text, keeps only the first line, trims it, rejects conversational
/// replies, and truncates to the practical character ceiling of the
/// requested token budget.
pub fn sanitize(raw: &str, max_tokens: u32) -> String {
    // A fence at position 0 leaves nothing, which is the intended outcome
    let unfenced = match raw.find("```") {
        Some(index) => &raw[..index],
        None => raw,
    };

    let line = unfenced.lines().next().unwrap_or("").trim();

    if is_conversational(line) {
        return String::new();
    }

    // Truncation can expose trailing whitespace; trim again so the result
    // is stable under repeated sanitization
    let capped = truncate_chars(line, max_tokens as usize * CHARS_PER_TOKEN);
    capped.trim_end().to_string()
}

/// Whether the text starts like a conversational reply, case-insensitively
fn is_conversational(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CONVERSATIONAL_OPENERS
        .iter()
        .any(|opener| lowered.starts_with(opener))
}

/// Truncate to at most `limit` characters, never splitting a code point
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((index, _)) => text[..index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod sanitize_tests;
