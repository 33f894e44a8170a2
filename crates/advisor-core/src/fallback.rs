//! Fallback Generator
//!
//! The fixed, deterministic analysis served whenever no real one can be
//! produced. Both the no-credential path and the parse-failure path return
//! this same literal, so callers cannot tell the two modes apart from the
//! payload alone. That is intentional: both mean "no real analysis".

use crate::model::{AnalysisResult, Rating};

/// Produce the fixed mock analysis result
pub fn fallback_result() -> AnalysisResult {
    AnalysisResult {
        summary: "We created a mock analysis because the OpenAI API key is not configured. Add your key to receive an AI generated review.".into(),
        ratings: vec![
            Rating {
                axis: "Risk Alignment".into(),
                score: "Review Needed".into(),
                explanation: "The current mix of holdings may not fully match the stated objectives. Review allocations to ensure they reflect your tolerance.".into(),
            },
            Rating {
                axis: "Growth Potential".into(),
                score: "Moderate".into(),
                explanation: "Several positions can compound over time, but diversifying across asset classes could improve resilience and upside.".into(),
            },
            Rating {
                axis: "Diversification".into(),
                score: "Needs Attention".into(),
                explanation: "Consider broadening exposure to avoid concentration risk and smooth performance across market cycles.".into(),
            },
            Rating {
                axis: "Liquidity".into(),
                score: "Adequate".into(),
                explanation: "Cash and short-term assets seem available for near-term needs, but revisit this as your objectives evolve.".into(),
            },
        ],
        suggestions: vec![
            "Clarify your primary objective (income, growth, preservation) and align position sizes accordingly.".into(),
            "Stress-test the portfolio against different market scenarios to understand drawdown expectations.".into(),
            "Introduce complementary asset classes or funds to reduce concentration in any single sector or theme.".into(),
            "Create an ongoing rebalancing schedule so allocations stay within your target ranges.".into(),
        ],
    }
}
