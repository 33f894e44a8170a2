//! Document Sanitizer
//!
//! Cleans uploaded text before it is interpolated into a prompt: null bytes
//! become spaces, and anything past the character ceiling is cut and marked.

/// Maximum characters of a document kept for the prompt
pub const MAX_FILE_CHARACTERS: usize = 2000;

/// Marker appended when a document is truncated
const TRUNCATION_MARKER: &str = "...";

/// Sanitize one document's textual content
///
/// Total function: never fails on well-formed text. Binary bytes that fail
/// to decode are the transport boundary's problem, not handled here.
pub fn sanitize(raw: &str) -> String {
    let cleaned = raw.replace('\0', " ");
    truncate_content(cleaned)
}

fn truncate_content(content: String) -> String {
    if content.chars().count() <= MAX_FILE_CHARACTERS {
        return content;
    }
    let mut truncated: String = content.chars().take(MAX_FILE_CHARACTERS).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}
