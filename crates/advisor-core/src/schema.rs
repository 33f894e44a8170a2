//! Result Schema
//!
//! The JSON-schema constraint handed to the completion service, and the
//! parse step that decides whether the service actually honored it.

use serde_json::{json, Value};

use crate::model::AnalysisResult;

/// Name of the schema constraint sent with every completion request
pub const SCHEMA_NAME: &str = "portfolio_review";

/// Minimum items required in `ratings` and `suggestions`
pub const MIN_ITEMS: usize = 3;

/// JSON schema describing `AnalysisResult`, as the service expects it
pub fn result_schema() -> Value {
    json!({
        "type": "object",
        "required": ["summary", "ratings", "suggestions"],
        "properties": {
            "summary": { "type": "string" },
            "ratings": {
                "type": "array",
                "minItems": MIN_ITEMS,
                "items": {
                    "type": "object",
                    "required": ["axis", "score", "explanation"],
                    "properties": {
                        "axis": { "type": "string" },
                        "score": { "type": "string" },
                        "explanation": { "type": "string" },
                    },
                },
            },
            "suggestions": {
                "type": "array",
                "minItems": MIN_ITEMS,
                "items": { "type": "string" },
            },
        },
    })
}

/// Outcome of parsing the service's textual payload
///
/// Malformed output is an explicit variant rather than an error so the
/// fallback substitution stays a visible branch in the caller.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Payload matched the schema; returned to the caller unmodified
    Parsed(AnalysisResult),
    /// Payload was not valid JSON, or the service ignored the schema
    Malformed(String),
}

/// Parse a completion payload into an `AnalysisResult`
///
/// Rejects structurally valid JSON that falls short of the minimum item
/// counts, since that means the service ignored the schema constraint.
pub fn parse_result(payload: &str) -> ParseOutcome {
    let result: AnalysisResult = match serde_json::from_str(payload) {
        Ok(result) => result,
        Err(err) => return ParseOutcome::Malformed(err.to_string()),
    };

    if result.ratings.len() < MIN_ITEMS {
        return ParseOutcome::Malformed(format!(
            "expected at least {MIN_ITEMS} ratings, got {}",
            result.ratings.len()
        ));
    }
    if result.suggestions.len() < MIN_ITEMS {
        return ParseOutcome::Malformed(format!(
            "expected at least {MIN_ITEMS} suggestions, got {}",
            result.suggestions.len()
        ));
    }

    ParseOutcome::Parsed(result)
}
