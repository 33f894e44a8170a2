//! Prompt Builder
//!
//! Assembles the single instruction string sent to the completion service:
//! role statement, risk-tolerance framing, per-document excerpts, and the
//! output schema description. Pure string construction, no I/O.
//!
//! Document content is interpolated without escaping beyond whitespace
//! collapsing. It is treated as opaque natural language for the downstream
//! model; the prompt-injection exposure is a known, accepted property of
//! this surface.

use crate::model::AnalysisRequest;

/// Build the complete analysis prompt for one request
pub fn build_prompt(request: &AnalysisRequest) -> String {
    let document_summaries = request
        .documents
        .iter()
        .enumerate()
        .map(|(index, doc)| {
            let trimmed = collapse_whitespace(&doc.content);
            format!("Document {} ({}): {}", index + 1, doc.name, trimmed)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    // Unreachable through intake (which requires at least one file), but the
    // builder stays total over zero-document requests.
    let documents_section = if document_summaries.is_empty() {
        "No documents were supplied. Ask for more detail.".into()
    } else {
        document_summaries
    };

    format!(
        r#"You are a fiduciary financial advisor evaluating a client's investment portfolio.
The client identifies their risk tolerance as "{risk}" which means: {description}.

You are provided with notes from the client about their holdings, allocation, or objectives:
{documents}

Respond with a JSON object that follows this schema:
{{
  "summary": string // A concise assessment (4-5 sentences) of how well the portfolio aligns with the stated risk tolerance.
  "ratings": Array<{{
    "axis": string // e.g. "Risk Alignment", "Growth Potential", "Diversification", "Liquidity"
    "score": string // A short label like "Strong", "Moderate", or "Needs Attention"
    "explanation": string // 2-3 sentences explaining the score with references to the provided holdings
  }}>
  "suggestions": string[] // 3-5 actionable steps that the client can take to close gaps or improve the portfolio alignment
}}

Always recommend improvements or adjustments, even if the portfolio is generally aligned. Avoid markdown in the JSON."#,
        risk = request.risk_tolerance.as_str(),
        description = request.risk_tolerance.description(),
        documents = documents_section,
    )
}

/// Trim and collapse all whitespace runs to single spaces
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
